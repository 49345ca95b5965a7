use std::env;

#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub api_base: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub endpoint: Option<String>,
    pub api_keys: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub prompt: Option<PromptConfig>,
    pub render: Option<RenderConfig>,
    pub output_dir: Option<String>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        PromptConfig {
            api_key: None,
            model: None,
            api_base: None,
        }
    }
}

impl PromptConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("SKETCHGEN_PROMPT_API_KEY").ok();
        let model = env::var("SKETCHGEN_PROMPT_MODEL").ok();
        let api_base = env::var("SKETCHGEN_PROMPT_API_BASE").ok();

        PromptConfig {
            api_key,
            model,
            api_base,
        }
    }

    pub fn with_credentials(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            endpoint: None,
            api_keys: Vec::new(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `SKETCHGEN_RENDER_API_KEYS` as a comma-separated ordered pool.
    pub fn from_env() -> Self {
        let endpoint = env::var("SKETCHGEN_RENDER_ENDPOINT").ok();
        let api_keys = env::var("SKETCHGEN_RENDER_API_KEYS")
            .ok()
            .map(|raw| parse_key_list(&raw))
            .unwrap_or_default();

        RenderConfig { endpoint, api_keys }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.api_keys = keys.into_iter().map(Into::into).collect();
        self
    }
}

fn parse_key_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(String::from)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: None,
            render: None,
            output_dir: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let output_dir = env::var("SKETCHGEN_OUTPUT_DIR").ok();

        Config {
            prompt: Some(PromptConfig::from_env()),
            render: Some(RenderConfig::from_env()),
            output_dir,
        }
    }

    pub fn with_prompt(mut self, config: PromptConfig) -> Self {
        self.prompt = Some(config);
        self
    }

    pub fn with_render(mut self, config: RenderConfig) -> Self {
        self.render = Some(config);
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }
}
