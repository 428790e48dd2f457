//! Datei- und Export-Grenzen: Play-Dateien (JSON) und Call-Sheet-Export.

pub mod callsheet;
pub mod play_file;

pub use callsheet::{
    number_sections, CallSheetConfig, CallSheetExporter, CallSheetJob, CallSheetPlay,
    CallSheetRequest, CallSheetSection, HttpCallSheetExporter, SectionSelection,
};
pub use play_file::PlayFile;
