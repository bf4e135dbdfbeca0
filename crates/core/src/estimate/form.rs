use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static INTEGER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+").expect("integer prefix pattern is valid"));

/// Errors in the what-if form. Reported inline; never reach the pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill out at least Client, Article, and Processing Time.")]
    MissingRequired,

    #[error("Processing Time must be a positive number.")]
    NotPositive,

    #[error("Processing Time must be at most {max} minutes.")]
    OutOfRange { max: u32 },
}

/// Raw what-if form input, as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewOrderForm {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub article: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub finishing: String,
    /// Minutes, as text. Read up to the first non-digit, so `"90 min"` is 90.
    #[serde(default)]
    pub processing_time: String,
}

/// A validated hypothetical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderData {
    pub client: String,
    pub article: String,
    pub color: String,
    pub finishing: String,
    pub processing_time: u32,
}

impl NewOrderForm {
    /// Checks required fields and reads the processing time.
    pub fn validate(&self) -> Result<NewOrderData, ValidationError> {
        if self.client.trim().is_empty()
            || self.article.trim().is_empty()
            || self.processing_time.trim().is_empty()
        {
            return Err(ValidationError::MissingRequired);
        }

        let digits = INTEGER_PREFIX
            .find(self.processing_time.trim_start())
            .ok_or(ValidationError::NotPositive)?;

        let minutes: i64 = match digits.as_str().parse() {
            Ok(v) => v,
            // only overflow can fail here; sign decides which way
            Err(_) if digits.as_str().starts_with('-') => {
                return Err(ValidationError::NotPositive)
            }
            Err(_) => return Err(ValidationError::OutOfRange { max: u32::MAX }),
        };
        if minutes <= 0 {
            return Err(ValidationError::NotPositive);
        }
        let processing_time =
            u32::try_from(minutes).map_err(|_| ValidationError::OutOfRange { max: u32::MAX })?;

        Ok(NewOrderData {
            client: self.client.clone(),
            article: self.article.clone(),
            color: self.color.clone(),
            finishing: self.finishing.clone(),
            processing_time,
        })
    }
}
