use std::fmt::{Display, Formatter, Result};

#[derive(Debug)]
pub enum Error {
  ReqwestError(reqwest::Error),
  JsonError(serde_json::Error),
  IoError(std::io::Error),
  CsvError(csv::Error),
  TemplateError(indicatif::style::TemplateError),
  InvalidDataType(String),
  InvalidOutputFormat(String),
  MissingParameter(String),
  MissingServerUrl(String),
  UnexpectedStatus(String),
  UnexpectedPayload(String),
}

impl Error {
  /// Process exit code reported by the binary for this kind of failure.
  pub fn exit_code(&self) -> i32 {
    match self {
      Error::InvalidDataType(_)
      | Error::InvalidOutputFormat(_)
      | Error::MissingParameter(_)
      | Error::MissingServerUrl(_) => 2,
      Error::ReqwestError(_) | Error::UnexpectedStatus(_) => 3,
      Error::JsonError(_) | Error::UnexpectedPayload(_) => 4,
      Error::IoError(_) | Error::CsvError(_) => 5,
      Error::TemplateError(_) => 1,
    }
  }
}

impl std::error::Error for Error {}

impl Display for Error {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Error::ReqwestError(e) => std::fmt::Display::fmt(e, f),
      Error::JsonError(e) => std::fmt::Display::fmt(e, f),
      Error::IoError(e) => std::fmt::Display::fmt(e, f),
      Error::CsvError(e) => std::fmt::Display::fmt(e, f),
      Error::TemplateError(e) => std::fmt::Display::fmt(e, f),
      Error::InvalidDataType(e) => std::fmt::Display::fmt(e, f),
      Error::InvalidOutputFormat(e) => std::fmt::Display::fmt(e, f),
      Error::MissingParameter(e) => std::fmt::Display::fmt(e, f),
      Error::MissingServerUrl(e) => std::fmt::Display::fmt(e, f),
      Error::UnexpectedStatus(e) => std::fmt::Display::fmt(e, f),
      Error::UnexpectedPayload(e) => std::fmt::Display::fmt(e, f),
    }
  }
}

impl From<reqwest::Error> for Error {
  fn from(reqwest_error: reqwest::Error) -> Self {
    Error::ReqwestError(reqwest_error)
  }
}

impl From<serde_json::Error> for Error {
  fn from(serde_json_error: serde_json::Error) -> Self {
    Error::JsonError(serde_json_error)
  }
}

impl From<std::io::Error> for Error {
  fn from(io_error: std::io::Error) -> Self {
    Error::IoError(io_error)
  }
}

impl From<csv::Error> for Error {
  fn from(csv_error: csv::Error) -> Self {
    Error::CsvError(csv_error)
  }
}

impl From<indicatif::style::TemplateError> for Error {
  fn from(template_error: indicatif::style::TemplateError) -> Self {
    Error::TemplateError(template_error)
  }
}
