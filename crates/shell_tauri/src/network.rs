//! Network snapshot probe behind the `get_network_details` command.

use std::net::IpAddr;

use network_interface::{NetworkInterface, NetworkInterfaceConfig};
use shell_host::{NetworkInterfaceInfo, NetworkSnapshot};

const PROBE_URL: &str = "https://www.google.com";

/// Builds a fresh network snapshot for the webview dialog.
///
/// Interface enumeration failure rejects the whole command (the webview
/// degrades to its locally synthesized snapshot); the reachability probe and
/// the Wi-Fi details are best-effort field by field.
#[tauri::command]
pub async fn get_network_details() -> Result<NetworkSnapshot, String> {
    let interfaces: Vec<NetworkInterfaceInfo> = NetworkInterface::show()
        .map_err(|err| format!("failed to enumerate network interfaces: {err}"))?
        .into_iter()
        .map(|iface| NetworkInterfaceInfo {
            ip: format_ip_list(&iface.addr.iter().map(|addr| addr.ip()).collect::<Vec<_>>()),
            name: iface.name,
        })
        .collect();

    let internet_accessible = reqwest::Client::new().get(PROBE_URL).send().await.is_ok();
    let (ssid, signal_strength) = wifi_details();

    Ok(NetworkSnapshot {
        online: !interfaces.is_empty(),
        interfaces,
        internet_accessible,
        ssid,
        signal_strength,
    })
}

fn format_ip_list(ips: &[IpAddr]) -> String {
    if ips.is_empty() {
        return "N/A".to_string();
    }
    ips.iter()
        .filter(|ip| ip.is_ipv4())
        .map(|ip| ip.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn wifi_details() -> (Option<String>, Option<i32>) {
    if cfg!(target_os = "macos") {
        let Some(output) = run_capture("airport", &["-I"]) else {
            return (None, None);
        };
        let ssid = field_after_marker(&output, "SSID:");
        let signal = field_after_marker(&output, "agrCtlRSSI:")
            .and_then(|value| value.parse::<i32>().ok());
        (ssid, signal)
    } else if cfg!(target_os = "linux") {
        let Some(output) = run_capture("iwctl", &["station", "wlan0", "show"]) else {
            return (None, None);
        };
        let ssid = field_after_marker(&output, "Connected network");
        let signal = field_after_marker(&output, "RSSI")
            .and_then(|value| value.split_whitespace().next()?.parse::<i32>().ok());
        (ssid, signal)
    } else if cfg!(target_os = "windows") {
        let Some(output) = run_capture("netsh", &["wlan", "show", "interfaces"]) else {
            return (None, None);
        };
        (parse_netsh_ssid(&output), parse_netsh_signal(&output))
    } else {
        (None, None)
    }
}

fn run_capture(program: &str, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new(program).args(args).output().ok()?;
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Returns the trimmed remainder of the first line starting with `marker`.
///
/// Matching on the line prefix keeps `SSID:` from picking up `BSSID:` lines.
fn field_after_marker(output: &str, marker: &str) -> Option<String> {
    output.lines().find_map(|line| {
        line.trim_start()
            .strip_prefix(marker)
            .map(|rest| rest.trim().to_string())
            .filter(|rest| !rest.is_empty())
    })
}

fn parse_netsh_ssid(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.contains("SSID") && !line.contains("BSSID"))
        .and_then(|line| line.split(':').nth(1))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_netsh_signal(output: &str) -> Option<i32> {
    output
        .lines()
        .find(|line| line.contains("Signal"))
        .and_then(|line| line.split(':').nth(1))
        .and_then(|value| value.trim().trim_end_matches('%').parse::<i32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ip_list_falls_back_when_no_addresses_exist() {
        assert_eq!(format_ip_list(&[]), "N/A");
    }

    #[test]
    fn ip_list_keeps_only_ipv4_addresses() {
        let ips = [
            "192.168.1.20".parse::<IpAddr>().expect("v4"),
            "fe80::1".parse::<IpAddr>().expect("v6"),
            "10.0.0.3".parse::<IpAddr>().expect("v4"),
        ];
        assert_eq!(format_ip_list(&ips), "192.168.1.20, 10.0.0.3");
    }

    #[test]
    fn airport_style_output_does_not_confuse_bssid_with_ssid() {
        let output = "     agrCtlRSSI: -48\n     BSSID: a0:b1:c2:d3:e4:f5\n     SSID: home-net\n";
        assert_eq!(
            field_after_marker(output, "SSID:").as_deref(),
            Some("home-net")
        );
        assert_eq!(
            field_after_marker(output, "agrCtlRSSI:").as_deref(),
            Some("-48")
        );
    }

    #[test]
    fn missing_marker_yields_none() {
        assert_eq!(field_after_marker("no wifi here\n", "SSID:"), None);
    }

    #[test]
    fn netsh_output_parses_ssid_and_percent_signal() {
        let output = "    Name                   : Wi-Fi\n    SSID                   : office\n    BSSID                  : a0:b1:c2:d3:e4:f5\n    Signal                 : 87%\n";
        assert_eq!(parse_netsh_ssid(output).as_deref(), Some("office"));
        assert_eq!(parse_netsh_signal(output), Some(87));
    }

    #[test]
    fn netsh_blank_ssid_yields_none() {
        let output = "    SSID                   : \n    Signal                 : \n";
        assert_eq!(parse_netsh_ssid(output), None);
        assert_eq!(parse_netsh_signal(output), None);
    }
}
