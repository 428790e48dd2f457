//! Call-Sheet-Export: Nummerierung der Plays und Aufruf des PDF-Dienstes.
//!
//! Die PDF-Erzeugung selbst passiert serverseitig. Hier werden nur die
//! Anfrage zusammengestellt und die Antwort-Bytes entgegengenommen.

use std::time::Duration;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// Vom Nutzer gewählte Section mit ihren Play-Namen in Reihenfolge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSelection {
    /// Section-Name
    pub name: String,
    /// Play-Namen in Anzeigereihenfolge
    #[serde(default)]
    pub plays: Vec<String>,
}

/// Nummeriertes Play im Call-Sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSheetPlay {
    /// Laufende Nummer (ab 1, über alle Sections fortlaufend)
    pub number: u32,
    /// Play-Name
    pub name: String,
}

/// Section im Call-Sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSheetSection {
    /// Section-Name
    pub name: String,
    /// Nummerierte Plays
    pub plays: Vec<CallSheetPlay>,
}

/// Layout-Konfiguration des Call-Sheets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSheetConfig {
    /// Titel
    pub title: String,
    /// Sections in gewählter Reihenfolge
    pub sections: Vec<CallSheetSection>,
}

/// Body von `POST /api/export/callsheet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSheetRequest {
    /// Playbook-ID
    pub playbook_id: String,
    /// Konfiguration
    pub config: CallSheetConfig,
}

/// Nummeriert Plays fortlaufend über alle Sections, beginnend bei 1.
///
/// Die Reihenfolge der Sections und der Plays innerhalb bleibt erhalten.
pub fn number_sections(selections: &[SectionSelection]) -> Vec<CallSheetSection> {
    let mut next: u32 = 1;
    selections
        .iter()
        .map(|section| CallSheetSection {
            name: section.name.clone(),
            plays: section
                .plays
                .iter()
                .map(|name| {
                    let play = CallSheetPlay {
                        number: next,
                        name: name.clone(),
                    };
                    next += 1;
                    play
                })
                .collect(),
        })
        .collect()
}

/// Export-Auftrag, wie ihn die CLI als JSON entgegennimmt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSheetJob {
    /// Playbook-ID
    pub playbook_id: String,
    /// Titel des Call-Sheets
    pub title: String,
    /// Gewählte Sections
    pub sections: Vec<SectionSelection>,
}

impl CallSheetJob {
    /// Baut die nummerierte Anfrage.
    pub fn to_request(&self) -> CallSheetRequest {
        CallSheetRequest {
            playbook_id: self.playbook_id.clone(),
            config: CallSheetConfig {
                title: self.title.clone(),
                sections: number_sections(&self.sections),
            },
        }
    }
}

/// Grenze zum PDF-Dienst.
pub trait CallSheetExporter {
    /// Sendet die Anfrage und liefert die PDF-Bytes.
    fn export(&self, request: &CallSheetRequest) -> anyhow::Result<Vec<u8>>;
}

/// HTTP-Implementierung über `ureq` (blockierend, vom Aufrufer ausgeführt).
pub struct HttpCallSheetExporter {
    agent: ureq::Agent,
    base_url: String,
    max_response_bytes: u64,
}

impl HttpCallSheetExporter {
    /// Zeitlimit für den gesamten Aufruf.
    const TIMEOUT: Duration = Duration::from_secs(60);

    /// Erstellt einen Exporter gegen `base_url` (ohne abschließenden Slash).
    pub fn new(base_url: impl Into<String>, max_response_bytes: u64) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Self::TIMEOUT))
            .build()
            .into();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_response_bytes,
        }
    }

    /// Vollständige Endpoint-URL.
    pub fn endpoint(&self) -> String {
        format!("{}/api/export/callsheet", self.base_url)
    }
}

impl CallSheetExporter for HttpCallSheetExporter {
    fn export(&self, request: &CallSheetRequest) -> anyhow::Result<Vec<u8>> {
        let url = self.endpoint();
        log::info!(
            "Call-Sheet-Export für Playbook {} an {}",
            request.playbook_id,
            url
        );

        let mut response = self
            .agent
            .post(&url)
            .send_json(request)
            .with_context(|| format!("Export-Anfrage an {url} fehlgeschlagen"))?;

        let bytes = response
            .body_mut()
            .with_config()
            .limit(self.max_response_bytes)
            .read_to_vec()
            .context("PDF-Antwort nicht lesbar")?;

        if bytes.is_empty() {
            bail!("Export-Dienst lieferte eine leere Antwort");
        }
        log::info!("Call-Sheet empfangen: {} Bytes", bytes.len());
        Ok(bytes)
    }
}
