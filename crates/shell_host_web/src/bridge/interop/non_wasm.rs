use shell_host::NetworkSnapshot;

fn unsupported() -> String {
    "The webview command bridge is only available when compiled for wasm32".to_string()
}

pub async fn invoke_unit(_command: &str) -> Result<(), String> {
    Err(unsupported())
}

pub async fn invoke_network_details() -> Result<NetworkSnapshot, String> {
    Err(unsupported())
}

pub async fn invoke_greet(_name: &str) -> Result<String, String> {
    Err(unsupported())
}

pub async fn invoke_log_message(_message: &str) -> Result<(), String> {
    Err(unsupported())
}
