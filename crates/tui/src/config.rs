use std::path::{
  Path,
  PathBuf
};

use crossterm::event::{
  KeyCode,
  KeyModifiers
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct TuiConfig {
  pub(crate) roll:        RollConfig,
  pub(crate) ui:          UiConfig,
  pub(crate) logging:     LoggingConfig,
  pub(crate) keybindings: Keybindings
}

#[derive(Debug, Deserialize)]
pub(crate) struct RollConfig {
  pub(crate) url:        String,
  pub(crate) key:        String,
  pub(crate) timeout_ms: u64
}

#[derive(Debug, Deserialize)]
pub(crate) struct UiConfig {
  pub(crate) refresh_interval_ms: u64
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoggingConfig {
  pub(crate) level: String,
  pub(crate) file:  Option<PathBuf>
}

#[derive(Debug, Deserialize)]
pub(crate) struct Keybindings {
  pub(crate) quit: String,
  pub(crate) open_search: String,
  pub(crate) clear_search: String,
  pub(crate) move_down: String,
  pub(crate) move_up: String,
  pub(crate) go_top: String,
  pub(crate) go_middle: String,
  pub(crate) go_bottom: String
}

#[derive(Debug, Clone)]
pub(crate) struct KeyBinding {
  pub(crate) code:      KeyCode,
  pub(crate) modifiers: KeyModifiers
}

#[derive(Debug, Clone)]
pub(crate) struct ResolvedKeybindings {
  pub(crate) quit: KeyBinding,
  pub(crate) open_search: KeyBinding,
  pub(crate) clear_search: KeyBinding,
  pub(crate) move_down: KeyBinding,
  pub(crate) move_up: KeyBinding,
  pub(crate) go_top: KeyBinding,
  pub(crate) go_middle: KeyBinding,
  pub(crate) go_bottom: KeyBinding
}

#[derive(Debug)]
pub(crate) struct ConfigError(
  pub(crate) String
);

impl std::fmt::Display for ConfigError {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>
  ) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl std::error::Error for ConfigError {}

impl TuiConfig {
  pub(crate) fn load(
    path: &Path
  ) -> Result<Self, ConfigError> {
    let base_dir = path
      .parent()
      .ok_or_else(|| {
        ConfigError(
          "config path has no parent"
            .into()
        )
      })?;

    let schema_path = base_dir
      .join("schemas")
      .join("tui.schema.json");

    let schema =
      std::fs::read_to_string(
        &schema_path
      )
      .map_err(|_| {
        ConfigError(format!(
          "schema not found at {}",
          schema_path.display()
        ))
      })?;

    let content =
      std::fs::read_to_string(path)
        .map_err(|e| {
          ConfigError(format!(
            "config IO error: {e}"
          ))
        })?;

    validate_toml(
      &schema,
      &content,
      &path.display().to_string()
    )?;

    let config: TuiConfig =
      toml::from_str(&content)
        .map_err(|e| {
          ConfigError(format!(
            "config parse error: {e}"
          ))
        })?;

    Ok(config)
  }

  pub(crate) fn resolved_keybindings(
    &self
  ) -> Result<
    ResolvedKeybindings,
    ConfigError
  > {
    Ok(ResolvedKeybindings {
      quit:         parse_key(
        &self.keybindings.quit
      )?,
      open_search:  parse_key(
        &self.keybindings.open_search
      )?,
      clear_search: parse_key(
        &self.keybindings.clear_search
      )?,
      move_down:    parse_key(
        &self.keybindings.move_down
      )?,
      move_up:      parse_key(
        &self.keybindings.move_up
      )?,
      go_top:       parse_key(
        &self.keybindings.go_top
      )?,
      go_middle:    parse_key(
        &self.keybindings.go_middle
      )?,
      go_bottom:    parse_key(
        &self.keybindings.go_bottom
      )?
    })
  }
}

pub(crate) fn default_config_path()
-> PathBuf {
  PathBuf::from(
    "crates/tui/res/config.toml"
  )
}

fn validate_toml(
  schema: &str,
  toml_input: &str,
  name: &str
) -> Result<(), ConfigError> {
  let schema_json: serde_json::Value =
    serde_json::from_str(schema)
      .map_err(|e| {
        ConfigError(format!(
          "schema parse error: {e}"
        ))
      })?;

  let compiled =
    jsonschema::validator_for(
      &schema_json
    )
    .map_err(|e| {
      ConfigError(format!(
        "schema compile error: {e}"
      ))
    })?;

  let toml_value: toml::Value =
    toml::from_str(toml_input)
      .map_err(|e| {
        ConfigError(format!(
          "{name}: {e}"
        ))
      })?;

  let json_value =
    serde_json::to_value(toml_value)
      .map_err(|e| {
        ConfigError(e.to_string())
      })?;

  let mut errors =
    compiled.iter_errors(&json_value);

  if let Some(err) = errors.next() {
    let mut messages =
      vec![err.to_string()];
    for e in errors.take(4) {
      messages.push(e.to_string());
    }

    return Err(ConfigError(format!(
      "schema validation failed for \
       {name}: {}",
      messages.join("; ")
    )));
  }

  Ok(())
}

fn parse_key(
  raw: &str
) -> Result<KeyBinding, ConfigError> {
  let raw = raw.trim();
  if raw.is_empty() {
    return Err(ConfigError(
      "empty keybinding".into()
    ));
  }

  let mut modifiers =
    KeyModifiers::NONE;
  let mut key = raw.to_string();

  if let Some(rest) =
    key.strip_prefix("ctrl+")
  {
    modifiers |= KeyModifiers::CONTROL;
    key = rest.to_string();
  }

  let code = match key.as_str() {
    | "left" => KeyCode::Left,
    | "right" => KeyCode::Right,
    | "up" => KeyCode::Up,
    | "down" => KeyCode::Down,
    | "tab" => KeyCode::Tab,
    | "enter" => KeyCode::Enter,
    | "backspace" => KeyCode::Backspace,
    | "esc" => KeyCode::Esc,
    | _ => {
      if key.chars().count() == 1 {
        let ch =
          key.chars().next().unwrap();
        if ch.is_ascii_uppercase()
          && !modifiers.contains(
            KeyModifiers::SHIFT
          )
        {
          modifiers |=
            KeyModifiers::SHIFT;
        }
        KeyCode::Char(ch)
      } else {
        return Err(ConfigError(
          format!(
            "unsupported keybinding \
             '{raw}'"
          )
        ));
      }
    }
  };

  Ok(KeyBinding {
    code,
    modifiers
  })
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use crossterm::event::{
    KeyCode,
    KeyModifiers
  };

  use super::{
    parse_key,
    TuiConfig
  };

  fn write_fixture(
    config_body: &str
  ) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir()
      .expect("temp dir");
    let schema_dir =
      dir.path().join("schemas");
    std::fs::create_dir_all(
      &schema_dir,
    )
    .expect("schema dir");
    let shipped = concat!(
      env!("CARGO_MANIFEST_DIR"),
      "/res/schemas/tui.schema.json"
    );
    std::fs::copy(
      shipped,
      schema_dir
        .join("tui.schema.json"),
    )
    .expect("schema copy");
    let path =
      dir.path().join("config.toml");
    std::fs::write(&path, config_body)
      .expect("config write");
    (dir, path)
  }

  fn shipped_config() -> &'static str {
    include_str!(concat!(
      env!("CARGO_MANIFEST_DIR"),
      "/res/config.toml"
    ))
  }

  #[test]
  fn shipped_config_loads() {
    let (_dir, path) =
      write_fixture(shipped_config());
    let config = TuiConfig::load(&path)
      .expect("load should succeed");
    assert_eq!(
      config.roll.timeout_ms,
      10_000
    );
    assert_eq!(
      config.keybindings.open_search,
      "/"
    );
    assert_eq!(
      config.logging.level,
      "info"
    );
    config
      .resolved_keybindings()
      .expect("bindings should parse");
  }

  #[test]
  fn missing_section_fails_schema() {
    let body = "\
      [roll]\n\
      url = \"http://x\"\n\
      key = \"k\"\n\
      timeout_ms = 1000\n\
      \n\
      [ui]\n\
      refresh_interval_ms = 100\n\
      \n\
      [logging]\n\
      level = \"info\"\n";
    let (_dir, path) =
      write_fixture(body);
    let err = TuiConfig::load(&path)
      .expect_err("load should fail");
    assert!(err.0.contains(
      "schema validation failed"
    ));
  }

  #[test]
  fn unknown_table_fails_schema() {
    let body = format!(
      "{}\n[extra]\nx = 1\n",
      shipped_config()
    );
    let (_dir, path) =
      write_fixture(&body);
    assert!(
      TuiConfig::load(&path).is_err()
    );
  }

  #[test]
  fn plain_chars_parse() {
    let binding =
      parse_key("q").expect("parses");
    assert_eq!(
      binding.code,
      KeyCode::Char('q')
    );
    assert_eq!(
      binding.modifiers,
      KeyModifiers::NONE
    );
  }

  #[test]
  fn uppercase_implies_shift() {
    let binding =
      parse_key("G").expect("parses");
    assert_eq!(
      binding.code,
      KeyCode::Char('G')
    );
    assert!(binding
      .modifiers
      .contains(KeyModifiers::SHIFT));
  }

  #[test]
  fn ctrl_prefix_parses() {
    let binding = parse_key("ctrl+r")
      .expect("parses");
    assert_eq!(
      binding.code,
      KeyCode::Char('r')
    );
    assert!(binding
      .modifiers
      .contains(KeyModifiers::CONTROL));
  }

  #[test]
  fn named_keys_parse() {
    assert_eq!(
      parse_key("esc")
        .expect("parses")
        .code,
      KeyCode::Esc
    );
    assert_eq!(
      parse_key("enter")
        .expect("parses")
        .code,
      KeyCode::Enter
    );
  }

  #[test]
  fn junk_bindings_fail() {
    assert!(parse_key("").is_err());
    assert!(
      parse_key("meta+q").is_err()
    );
  }
}
