use anyhow::{Context, Result};
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};
use textcanvas_config::Config;
use textcanvas_engine::{RenderOptions, Script};

fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        indent_width: config.indent_width,
        bullet: config.bullet.clone(),
        decode_entities: config.decode_entities,
    }
}

fn load_script(path: &Path) -> Result<Script> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let script: Script = toml::from_str(&source)
        .with_context(|| format!("Failed to parse script {}", path.display()))?;
    Ok(script)
}

/// Writes the default config to `path` unless a file is already there.
/// Returns whether a file was written.
fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    Config::default()
        .save_to_path(path)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    Ok(true)
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <script.toml>", args[0]);
        eprintln!("       {} --init-config", args[0]);
        process::exit(1);
    }

    if args[1] == "--init-config" {
        let config_path = Config::config_path();
        if init_config(&config_path)? {
            println!("Wrote default config to {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }
        return Ok(());
    }
    let script_path = PathBuf::from(&args[1]);

    let config = match Config::load()? {
        Some(config) => {
            log::info!("Loaded config from {}", Config::config_path().display());
            config
        }
        None => {
            log::debug!(
                "No config file at {}, using defaults",
                Config::config_path().display()
            );
            Config::default()
        }
    };

    let script = load_script(&script_path)?;
    log::info!(
        "Rendering {} step(s) from {}",
        script.steps.len(),
        script_path.display()
    );

    let text = script.render(&render_options(&config))?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn render_options_follow_config() {
        let config = Config {
            indent_width: 2,
            bullet: "- ".to_string(),
            decode_entities: false,
        };

        let options = render_options(&config);

        assert_eq!(options.indent_width, 2);
        assert_eq!(options.bullet, "- ");
        assert!(!options.decode_entities);
    }

    #[test]
    fn default_config_matches_engine_defaults() {
        assert_eq!(render_options(&Config::default()), RenderOptions::default());
    }

    #[test]
    fn load_and_render_script_file() {
        let temp_dir = TempDir::new().unwrap();
        let script_file = temp_dir.path().join("doc.toml");
        fs::write(
            &script_file,
            r#"
[[step]]
op = "inline"
text = "  Tom   &amp;  Jerry "

[[step]]
op = "list_start"

[[step]]
op = "line"
content = "cat"
"#,
        )
        .unwrap();

        let script = load_script(&script_file).unwrap();
        let text = script.render(&render_options(&Config::default())).unwrap();

        assert_eq!(text, "Tom & Jerry\n  * cat");
    }

    #[test]
    fn init_config_writes_defaults_once() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("textcanvas/config.toml");

        assert!(init_config(&config_file).unwrap());
        assert_eq!(
            Config::load_from_path(&config_file).unwrap(),
            Some(Config::default())
        );

        fs::write(&config_file, "indent_width = 2\n").unwrap();
        assert!(!init_config(&config_file).unwrap());
        assert_eq!(
            Config::load_from_path(&config_file).unwrap().unwrap().indent_width,
            2
        );
    }

    #[test]
    fn missing_script_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");

        let err = load_script(&missing).unwrap_err();

        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn invalid_script_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let script_file = temp_dir.path().join("bad.toml");
        fs::write(&script_file, "[[step]]\nop = \"shout\"\n").unwrap();

        let err = load_script(&script_file).unwrap_err();

        assert!(err.to_string().starts_with("Failed to parse script"));
    }
}
