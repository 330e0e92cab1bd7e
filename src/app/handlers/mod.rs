//! Feature-Handler für AppIntent-Verarbeitung.
//!
//! Jeder Handler gruppiert die Mutationen eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod mesh;
pub mod overlay;
pub mod view;
