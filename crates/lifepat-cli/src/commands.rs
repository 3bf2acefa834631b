use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use lifepat_codec::{PRESETS, find_preset};
use lifepat_core::PatternEditor;
use lifepat_import::ImageImport;
use lifepat_model::EditorConfig;
use tracing::{info, info_span};

use lifepat_cli::ops::apply_all;
use lifepat_cli::output::{render_json, render_text};
use lifepat_cli::settings::{ConfigOverrides, apply_overrides, load_config, save_config};
use lifepat_cli::summary::{presets_table, print_stats};

use crate::cli::{ConfigArgs, GridArgs, ImageArgs, OutputFormatArg, PresetArgs, SessionArgs, TextArgs};

fn grid_overrides(grid: &GridArgs) -> ConfigOverrides {
    ConfigOverrides {
        rows: grid.rows,
        cols: grid.cols,
        history: grid.history,
        ..ConfigOverrides::default()
    }
}

fn session_config(config_path: Option<&Path>, session: &SessionArgs) -> EditorConfig {
    let overrides = ConfigOverrides {
        pattern_name: session.output.name.clone(),
        ..grid_overrides(&session.grid)
    };
    apply_overrides(load_config(config_path), &overrides)
}

/// Applies the requested ops and prints the result.
fn finish(
    mut editor: PatternEditor,
    session: &SessionArgs,
    name: &str,
    source: &str,
    import: Option<&ImageImport>,
) -> Result<()> {
    apply_all(&session.ops, &mut editor);
    let output = &session.output;
    let rendered = match output.format {
        OutputFormatArg::Text => render_text(&editor.export(), name, output.raw),
        OutputFormatArg::Json => render_json(&editor, name).context("serialize report")?,
    };
    println!("{rendered}");
    if output.stats {
        print_stats(&editor, source, import);
    }
    Ok(())
}

fn read_source(source: &Path) -> Result<String> {
    if source == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("read pattern from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(source).with_context(|| format!("read {}", source.display()))
    }
}

pub fn run_text(config_path: Option<&Path>, args: &TextArgs) -> Result<()> {
    let span = info_span!("text", source = %args.source.display());
    let _guard = span.enter();
    let config = session_config(config_path, &args.session);
    let mut editor = PatternEditor::from_config(&config).context("build editor")?;
    let text = read_source(&args.source)?;
    let count = editor
        .import_text(&text)
        .with_context(|| format!("import {}", args.source.display()))?;
    info!(alive = count, "loaded text pattern");
    finish(
        editor,
        &args.session,
        &config.pattern_name,
        &args.source.display().to_string(),
        None,
    )
}

pub fn run_image(config_path: Option<&Path>, args: &ImageArgs) -> Result<()> {
    let span = info_span!("image", path = %args.path.display());
    let _guard = span.enter();
    let overrides = ConfigOverrides {
        threshold: args.threshold,
        pattern_name: args.session.output.name.clone(),
        ..grid_overrides(&args.session.grid)
    };
    let config = apply_overrides(load_config(config_path), &overrides);
    let mut editor = PatternEditor::from_config(&config).context("build editor")?;
    let import = editor
        .import_image_file(&args.path, config.threshold)
        .with_context(|| format!("import {}", args.path.display()))?;
    finish(
        editor,
        &args.session,
        &config.pattern_name,
        &args.path.display().to_string(),
        Some(&import),
    )
}

pub fn run_preset(config_path: Option<&Path>, args: &PresetArgs) -> Result<()> {
    let preset = find_preset(&args.name)
        .ok_or_else(|| anyhow!("unknown preset `{}` (see `lifepat presets`)", args.name))?;
    let config = session_config(config_path, &args.session);
    let mut editor = PatternEditor::from_config(&config).context("build editor")?;
    editor
        .import_text(preset.text)
        .with_context(|| format!("load preset {}", preset.name))?;
    let name = args.session.output.name.as_deref().unwrap_or(preset.name);
    finish(editor, &args.session, name, preset.name, None)
}

pub fn run_presets() {
    println!("{}", presets_table(PRESETS));
}

pub fn run_config(config_path: Option<&Path>, args: &ConfigArgs) -> Result<()> {
    let overrides = ConfigOverrides {
        threshold: args.threshold,
        pattern_name: args.name.clone(),
        ..grid_overrides(&args.grid)
    };
    let config = apply_overrides(load_config(config_path), &overrides);
    config.dims().context("invalid grid size in configuration")?;
    print!(
        "{}",
        toml::to_string_pretty(&config).context("serialize settings")?
    );
    if args.write {
        let path: PathBuf = save_config(&config, config_path)?;
        eprintln!("Saved settings to {}", path.display());
    }
    Ok(())
}
