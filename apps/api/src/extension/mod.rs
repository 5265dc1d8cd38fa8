// Browser extension surface: the typed message protocol the extension's
// background script relays to the API, plus log ingestion.

pub mod handlers;
pub mod models;
