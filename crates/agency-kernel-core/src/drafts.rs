//! Add-client and add-campaign form state.
//!
//! Saving a draft validates it and then drops it. Nothing is written to any store.

use serde::{Deserialize, Serialize};

use crate::money::Currency;
use crate::record::CampaignType;
use crate::KernelError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct ClientDraft {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub notes: String,
}

impl ClientDraft {
    /// # Errors
    /// Returns [`KernelError::Validation`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), KernelError> {
        require("name", &self.name)?;
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            return Err(KernelError::Validation(format!(
                "email MUST contain '@' when provided, got {:?}",
                self.email
            )));
        }
        Ok(())
    }

    /// # Errors
    /// Same as [`ClientDraft::validate`].
    pub fn save(self) -> Result<(), KernelError> {
        self.validate()?;
        tracing::debug!(name = %self.name, "client draft accepted and discarded");
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct CampaignDraft {
    pub name: String,
    pub client: String,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    pub budget: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl CampaignDraft {
    /// # Errors
    /// Returns [`KernelError::Validation`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), KernelError> {
        require("name", &self.name)?;
        require("client", &self.client)?;
        self.parsed_budget()?;
        Ok(())
    }

    /// Budget as entered, parsed with the currency rules. Blank means unset.
    ///
    /// # Errors
    /// Returns [`KernelError::Validation`] when the budget text is not a currency amount.
    pub fn parsed_budget(&self) -> Result<Option<Currency>, KernelError> {
        let Some(raw) = self.budget.as_deref().map(str::trim).filter(|raw| !raw.is_empty())
        else {
            return Ok(None);
        };
        Currency::parse(raw).map(Some).ok_or_else(|| {
            KernelError::Validation(format!("budget MUST be a dollar amount, got {raw:?}"))
        })
    }

    /// # Errors
    /// Same as [`CampaignDraft::validate`].
    pub fn save(self) -> Result<(), KernelError> {
        self.validate()?;
        tracing::debug!(
            name = %self.name,
            campaign_type = self.campaign_type.as_str(),
            "campaign draft accepted and discarded"
        );
        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), KernelError> {
    if value.trim().is_empty() {
        return Err(KernelError::Validation(format!("{field} MUST be provided")));
    }
    Ok(())
}
