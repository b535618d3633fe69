use serde::{Deserialize, Serialize};

/// Header row used whenever the submitted headers don't add up to four columns.
pub const DEFAULT_HEADERS: [&str; 4] = ["TYPE OF VEHICLE", "10 HOURS 80 KM", "EXTRA HOURS", "EXTRA KM"];

/// The four column titles of the rate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnHeaders(pub [String; 4]);

impl ColumnHeaders {
    /// Normalize submitted headers: trim, uppercase, drop blanks.
    ///
    /// Anything other than exactly four surviving entries is replaced by
    /// [`DEFAULT_HEADERS`].
    pub fn from_submitted<'a, I>(raw: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let cleaned: Vec<String> = raw
            .into_iter()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(str::to_uppercase)
            .collect();

        match <[String; 4]>::try_from(cleaned) {
            Ok(headers) => Self(headers),
            Err(_) => Self::default(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_default(&self) -> bool {
        self.iter().eq(DEFAULT_HEADERS)
    }
}

impl Default for ColumnHeaders {
    fn default() -> Self {
        Self(DEFAULT_HEADERS.map(str::to_string))
    }
}

/// One vehicle type and its three rate figures. All values are display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRecord {
    pub vehicle: String,
    pub rate1: String,
    pub rate2: String,
    pub rate3: String,
}

impl RowRecord {
    /// Cells in column order.
    pub fn cells(&self) -> [&str; 4] {
        [&self.vehicle, &self.rate1, &self.rate2, &self.rate3]
    }
}

/// Everything the renderer needs for one quotation. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationRequest {
    pub recipient_company: String,
    pub recipient_location: String,
    pub column_headers: ColumnHeaders,
    pub rows: Vec<RowRecord>,
    pub notes: Vec<String>,
}
