use std::io::IsTerminal;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use slmx4_client::VersionInfo;
use slmx4_schema::{HealthMsg, Vector};

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct HealthOutput<'a> {
    presence_detected: bool,
    respiration_detected: bool,
    movement_detected: bool,
    movement_type: u32,
    distance: f32,
    distance_conf: f32,
    respiration_rpm: f32,
    respiration_conf: f32,
    rms: f32,
    temperature: f32,
    humidity: f32,
    lux: f32,
    frame_count: Option<u32>,
    minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<&'a str>,
}

impl<'a> HealthOutput<'a> {
    fn from_msg(health: &HealthMsg, timestamp: Option<&'a str>) -> Self {
        Self {
            presence_detected: health.presence_detected,
            respiration_detected: health.respiration_detected,
            movement_detected: health.movement_detected,
            movement_type: health.movement_type,
            distance: health.distance,
            distance_conf: health.distance_conf,
            respiration_rpm: health.respiration_rpm,
            respiration_conf: health.respiration_conf,
            rms: health.rms,
            temperature: health.temperature,
            humidity: health.humidity,
            lux: health.lux,
            frame_count: health.frame_count(),
            minutes: health.minutes(),
            timestamp,
        }
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("presence_detected", self.presence_detected.to_string()),
            (
                "respiration_detected",
                self.respiration_detected.to_string(),
            ),
            ("movement_detected", self.movement_detected.to_string()),
            ("movement_type", self.movement_type.to_string()),
            ("distance", self.distance.to_string()),
            ("distance_conf", self.distance_conf.to_string()),
            ("respiration_rpm", self.respiration_rpm.to_string()),
            ("respiration_conf", self.respiration_conf.to_string()),
            ("rms", self.rms.to_string()),
            ("temperature", self.temperature.to_string()),
            ("humidity", self.humidity.to_string()),
            ("lux", self.lux.to_string()),
            ("frame_count", display_opt(self.frame_count)),
            ("minutes", display_opt(self.minutes)),
        ]
    }
}

pub fn print_health(health: &HealthMsg, format: OutputFormat) {
    let timestamp = now_unix_seconds();
    let out = HealthOutput::from_msg(health, Some(timestamp.as_str()));
    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"]);
            for (field, value) in out.rows() {
                table.add_row(vec![field.to_string(), value]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (field, value) in out.rows() {
                println!("{field} = {value}");
            }
        }
    }
}

#[derive(Serialize)]
struct WaveOutput<'a> {
    len: u32,
    vec: &'a [f32],
}

pub fn print_wave(wave: &Vector, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&WaveOutput {
            len: wave.len,
            vec: &wave.vec,
        }),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["LEN", "VEC"])
                .add_row(vec![wave.len.to_string(), wave_preview(&wave.vec)]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("len = {}", wave.len);
            println!("vec = [{}]", wave_preview(&wave.vec));
        }
    }
}

#[derive(Serialize)]
struct VersionOutput<'a> {
    port: &'a str,
    firmware_name: &'a str,
    firmware_version: &'a str,
    protocol_version: &'a str,
}

pub fn print_version_info(port: &str, version: &VersionInfo, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&VersionOutput {
            port,
            firmware_name: &version.firmware_name,
            firmware_version: &version.firmware_version,
            protocol_version: &version.protocol_version,
        }),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PORT", "FIRMWARE", "VERSION", "PROTOCOL"])
                .add_row(vec![
                    port.to_string(),
                    version.firmware_name.clone(),
                    version.firmware_version.clone(),
                    version.protocol_version.clone(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("port = {port}");
            println!("firmware_name = {}", version.firmware_name);
            println!("firmware_version = {}", version.firmware_version);
            println!("protocol_version = {}", version.protocol_version);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn display_opt(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn wave_preview(values: &[f32]) -> String {
    const PREVIEW_LEN: usize = 16;
    let mut parts: Vec<String> = values
        .iter()
        .take(PREVIEW_LEN)
        .map(|v| format!("{v:.4}"))
        .collect();
    if values.len() > PREVIEW_LEN {
        parts.push(format!("(+{} more)", values.len() - PREVIEW_LEN));
    }
    parts.join(" ")
}

fn now_unix_seconds() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_preview_truncates() {
        let values: Vec<f32> = (0..20).map(|i| i as f32).collect();
        let preview = wave_preview(&values);
        assert!(preview.contains("(+4 more)"));
    }

    #[test]
    fn wave_preview_short_vector_untouched() {
        let preview = wave_preview(&[0.5, 1.0]);
        assert_eq!(preview, "0.5000 1.0000");
    }

    #[test]
    fn health_rows_cover_every_field() {
        let health = HealthMsg {
            debug: vec![9, 1],
            ..Default::default()
        };
        let out = HealthOutput::from_msg(&health, None);
        assert_eq!(out.rows().len(), 14);
    }
}
