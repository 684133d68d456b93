use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use slmx4_transport::{available_ports, SerialPortInfo, SerialPortType};

use crate::cmd::PortsArgs;
use crate::exit::{transport_error, CliResult, SUCCESS};
use crate::output::OutputFormat;

pub fn run(_args: PortsArgs, format: OutputFormat) -> CliResult<i32> {
    let ports = available_ports().map_err(|err| transport_error("port enumeration failed", err))?;

    match format {
        OutputFormat::Json => {
            let out: Vec<PortOutput> = ports.iter().map(PortOutput::from_info).collect();
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PORT", "KIND", "DETAIL"]);
            for port in &ports {
                let (kind, detail) = describe(&port.port_type);
                table.add_row(vec![port.port_name.clone(), kind.to_string(), detail]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for port in &ports {
                let (kind, detail) = describe(&port.port_type);
                println!("{} {kind} {detail}", port.port_name);
            }
        }
    }

    Ok(SUCCESS)
}

#[derive(Serialize)]
struct PortOutput {
    port: String,
    kind: &'static str,
    detail: String,
}

impl PortOutput {
    fn from_info(info: &SerialPortInfo) -> Self {
        let (kind, detail) = describe(&info.port_type);
        Self {
            port: info.port_name.clone(),
            kind,
            detail,
        }
    }
}

/// Human-readable kind/detail pair for a port type. The SLM-X4 shows
/// up as a USB port.
fn describe(port_type: &SerialPortType) -> (&'static str, String) {
    match port_type {
        SerialPortType::UsbPort(usb) => {
            let product = usb.product.as_deref().unwrap_or("unknown product");
            ("usb", format!("{:04x}:{:04x} {product}", usb.vid, usb.pid))
        }
        SerialPortType::PciPort => ("pci", String::new()),
        SerialPortType::BluetoothPort => ("bluetooth", String::new()),
        SerialPortType::Unknown => ("unknown", String::new()),
    }
}

#[cfg(test)]
mod tests {
    use slmx4_transport::UsbPortInfo;

    use super::*;

    #[test]
    fn describes_usb_ports() {
        let usb = SerialPortType::UsbPort(UsbPortInfo {
            vid: 0x1915,
            pid: 0x520f,
            serial_number: None,
            manufacturer: Some("Sensor Logic".into()),
            product: Some("SLM-X4".into()),
        });
        let (kind, detail) = describe(&usb);
        assert_eq!(kind, "usb");
        assert!(detail.contains("1915:520f"));
        assert!(detail.contains("SLM-X4"));
    }

    #[test]
    fn describes_unknown_ports() {
        let (kind, detail) = describe(&SerialPortType::Unknown);
        assert_eq!(kind, "unknown");
        assert!(detail.is_empty());
    }
}
