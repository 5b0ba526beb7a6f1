//! Registration status lookup against the in-memory record list.

use std::time::Duration;

use log::{info, warn};
use thiserror::Error;

use crate::data::StatusRecord;
use crate::i18n::Key;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
	#[error("Registration ID is empty.")]
	EmptyId,

	#[error("Registration ID not found. Please check and try again.")]
	NotFound { id: String },
}

impl LookupError {
	/// Dictionary entry shown to the visitor for this error.
	pub fn message_key(&self) -> Key {
		match self {
			LookupError::EmptyId => Key::StatusEmptyId,
			LookupError::NotFound { .. } => Key::StatusNotFound,
		}
	}
}

/// Case-insensitive match on the trimmed registration id.
pub fn find<'a>(records: &'a [StatusRecord], id: &str) -> Result<&'a StatusRecord, LookupError> {
	let id = id.trim();
	if id.is_empty() {
		return Err(LookupError::EmptyId);
	}
	records
		.iter()
		.find(|record| record.id.eq_ignore_ascii_case(id))
		.ok_or_else(|| LookupError::NotFound { id: id.to_string() })
}

/// Stand-in for a status backend: a fixed record list answered after `delay`.
#[derive(Clone, Copy, Debug)]
pub struct StatusLookup {
	records: &'static [StatusRecord],
	delay: Duration,
}

impl StatusLookup {
	pub fn new(records: &'static [StatusRecord], delay: Duration) -> Self {
		Self { records, delay }
	}

	/// How long the caller should wait before calling [`StatusLookup::resolve`].
	pub fn delay(&self) -> Duration {
		self.delay
	}

	pub fn resolve(&self, id: &str) -> Result<&'static StatusRecord, LookupError> {
		let result = find(self.records, id);
		match &result {
			Ok(record) => info!("Status lookup {} -> {}", record.id, record.stage.label()),
			Err(err) => warn!("Status lookup for {:?} failed: {}", id.trim(), err),
		}
		result
	}
}

/// What the status portal is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LookupPhase {
	#[default]
	Idle,
	Loading,
	Found(&'static StatusRecord),
	Failed(LookupError),
}

impl LookupPhase {
	pub fn is_loading(&self) -> bool {
		matches!(self, LookupPhase::Loading)
	}

	pub fn record(&self) -> Option<&'static StatusRecord> {
		match self {
			LookupPhase::Found(record) => Some(record),
			_ => None,
		}
	}

	pub fn error(&self) -> Option<&LookupError> {
		match self {
			LookupPhase::Failed(err) => Some(err),
			_ => None,
		}
	}
}

impl From<Result<&'static StatusRecord, LookupError>> for LookupPhase {
	fn from(result: Result<&'static StatusRecord, LookupError>) -> Self {
		match result {
			Ok(record) => LookupPhase::Found(record),
			Err(err) => LookupPhase::Failed(err),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::{STATUS_RECORDS, Stage};

	fn lookup() -> StatusLookup {
		StatusLookup::new(STATUS_RECORDS, Duration::ZERO)
	}

	#[test]
	fn finds_record_case_insensitively() {
		let record = lookup().resolve("agr-2023-001").unwrap();
		assert_eq!(record.product_name, "SuperPhos 20");
		assert_eq!(record.stage, Stage::EfficacyTesting);

		let record = lookup().resolve("  AGR-2023-002 ").unwrap();
		assert_eq!(record.company_name, "CV Tani Maju");
	}

	#[test]
	fn unknown_id_is_not_found() {
		let err = lookup().resolve("AGR-1999-999").unwrap_err();
		assert_eq!(
			err,
			LookupError::NotFound {
				id: "AGR-1999-999".into()
			}
		);
		assert_eq!(
			err.to_string(),
			"Registration ID not found. Please check and try again."
		);
		assert_eq!(err.message_key(), Key::StatusNotFound);
	}

	#[test]
	fn blank_id_is_rejected() {
		assert_eq!(find(STATUS_RECORDS, "   "), Err(LookupError::EmptyId));
	}

	#[test]
	fn blank_id_has_its_own_message() {
		let key = LookupError::EmptyId.message_key();
		assert_eq!(key, Key::StatusEmptyId);
		assert_ne!(key, Key::StatusPlaceholder);
		assert_eq!(
			crate::i18n::text(crate::i18n::Lang::En, key),
			"Please enter a registration ID."
		);
	}

	#[test]
	fn delay_is_injected() {
		assert_eq!(lookup().delay(), Duration::ZERO);
		let slow = StatusLookup::new(STATUS_RECORDS, Duration::from_millis(1500));
		assert_eq!(slow.delay().as_millis(), 1500);
	}

	#[test]
	fn phase_from_result_carries_record_or_error() {
		let found = LookupPhase::from(lookup().resolve("AGR-2023-003"));
		assert_eq!(found.record().map(|r| r.product_name), Some("Nitrogen Plus"));
		assert!(found.error().is_none());

		let failed = LookupPhase::from(lookup().resolve("nope"));
		assert!(failed.record().is_none());
		assert!(failed.error().is_some());
		assert!(!failed.is_loading());
		assert!(LookupPhase::Loading.is_loading());
	}
}
