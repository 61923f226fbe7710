pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_supported_extensions() -> String {
        ".java,.js,.jsx,.ts,.tsx,.py,.go,.rb,.php,.cpp,.c,.cs,.kt,.swift,.scala,.rs".to_string()
    }

    pub fn default_max_file_size() -> usize {
        100_000
    }

    pub fn default_provider() -> String {
        "openai".to_string()
    }

    pub fn default_model() -> String {
        "gpt-4o".to_string()
    }

    pub fn default_max_tokens() -> u32 {
        2000
    }

    pub fn default_temperature() -> f32 {
        0.1
    }

    pub fn default_api_key_env() -> String {
        "OPENAI_API_KEY".to_string()
    }

    pub fn default_request_timeout_secs() -> u64 {
        120
    }

    pub fn default_api_url() -> String {
        "https://api.github.com".to_string()
    }

    pub fn default_token_env() -> String {
        "GITHUB_TOKEN".to_string()
    }
}
