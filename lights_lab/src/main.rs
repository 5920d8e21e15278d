//! Headless lighting playground
//!
//! Builds the light rig from a rig file (or the built-in showcase), applies
//! panel edits given on the command line, runs a number of frames against a
//! headless renderer and prints the resulting panel.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use light_rig::foundation::logging;
use light_rig::prelude::*;
use light_rig::ui::WidgetKind;

const DEFAULT_FRAMES: u64 = 120;

/// Directory holding `textures/`, so texture paths work from any working directory
const DEFAULT_ASSETS: &str = env!("CARGO_MANIFEST_DIR");

/// One `Folder/label=value` edit
#[derive(Debug)]
struct PanelEdit {
    folder: String,
    label: String,
    value: String,
}

impl PanelEdit {
    fn parse(text: &str) -> Result<Self> {
        let (path, value) = text
            .split_once('=')
            .ok_or_else(|| anyhow!("expected Folder/label=value, got {text:?}"))?;
        let (folder, label) = path
            .split_once('/')
            .ok_or_else(|| anyhow!("expected Folder/label before '=', got {path:?}"))?;
        Ok(Self {
            folder: folder.trim().to_string(),
            label: label.trim().to_string(),
            value: value.trim().to_string(),
        })
    }

    fn apply<B: RenderBackend, C: CameraControls>(
        &self,
        panel: &mut DebugPanel,
        lab: &mut LightLab<B, C>,
    ) -> Result<()> {
        let widget = panel
            .find(&self.folder, &self.label)
            .ok_or_else(|| anyhow!("no control {}/{}", self.folder, self.label))?;
        let kind = panel
            .spec(widget)
            .map(ControlSpec::kind)
            .ok_or_else(|| anyhow!("control {}/{} vanished", self.folder, self.label))?;

        let value = match kind {
            WidgetKind::Slider { .. } => WidgetValue::Scalar(
                self.value.parse().with_context(|| format!("{:?} is not a number", self.value))?,
            ),
            WidgetKind::ColorPicker => WidgetValue::Color(
                Color::parse(&self.value).with_context(|| format!("{:?} is not a color", self.value))?,
            ),
            WidgetKind::Checkbox => WidgetValue::Toggle(
                self.value.parse().with_context(|| format!("{:?} is not true/false", self.value))?,
            ),
        };

        let Some(event) = panel.set_value(widget, value) else {
            bail!("{}/{} rejected {:?}", self.folder, self.label, self.value);
        };
        lab.handle_event(event)?;
        log::info!("{}/{} = {}", self.folder, self.label, self.value);
        Ok(())
    }
}

fn main() -> Result<()> {
    let matches = Command::new("lights_lab")
        .about("Runs the light rig headless and prints the tuning panel")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Rig file (.ron or .toml); the built-in showcase when omitted"),
        )
        .arg(
            Arg::new("frames")
                .short('f')
                .long("frames")
                .value_name("COUNT")
                .value_parser(clap::value_parser!(u64))
                .help("Number of frames to draw"),
        )
        .arg(
            Arg::new("set")
                .short('s')
                .long("set")
                .value_name("FOLDER/LABEL=VALUE")
                .action(ArgAction::Append)
                .help("Panel edit applied before the first frame, e.g. \"Point Light/intensity=0.9\""),
        )
        .arg(
            Arg::new("assets")
                .short('a')
                .long("assets")
                .value_name("DIR")
                .default_value(DEFAULT_ASSETS)
                .help("Directory relative texture paths are resolved against"),
        )
        .arg(
            Arg::new("write-config")
                .long("write-config")
                .value_name("FILE")
                .help("Save the effective rig file and exit"),
        )
        .get_matches();

    logging::init();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => RigConfig::load_from_file(path).with_context(|| format!("loading rig file {path}"))?,
        None => RigConfig::default(),
    };
    if let Some(frames) = matches.get_one::<u64>("frames") {
        config.frames = Some(*frames);
    }

    if let Some(path) = matches.get_one::<String>("write-config") {
        let path = PathBuf::from(path);
        config
            .save_to_file(&path)
            .with_context(|| format!("writing rig file {}", path.display()))?;
        log::info!("Rig written to {}", path.display());
        return Ok(());
    }

    let edits = matches
        .get_many::<String>("set")
        .into_iter()
        .flatten()
        .map(|text| PanelEdit::parse(text))
        .collect::<Result<Vec<_>>>()?;

    let assets = matches
        .get_one::<String>("assets")
        .map_or_else(|| PathBuf::from(DEFAULT_ASSETS), PathBuf::from);
    log::debug!("Assets from {}", assets.display());

    let mut panel = DebugPanel::new();
    let mut lab = LightLab::build(
        &config,
        HeadlessBackend::new(),
        StaticControls,
        TextureManager::default().with_asset_root(assets),
        &mut panel,
    );
    for issue in lab.issues() {
        log::warn!("{}", issue);
    }
    for edit in &edits {
        edit.apply(&mut panel, &mut lab)?;
    }

    let clock = config.frame_step.map_or_else(Clock::new, Clock::fixed_step);
    let mut frames = FrameLoop::new(clock).with_frame_limit(config.frames.unwrap_or(DEFAULT_FRAMES));
    let drawn = lab.run(&mut frames)?;

    let backend = &lab.context().backend;
    log::info!("Drew {} frames at {:?}", drawn, backend.size());
    if let Some(frame) = backend.last_frame() {
        for light in &frame.lights {
            log::info!(
                "{:<18} #{:06x} intensity {:.3} at ({:.2}, {:.2}, {:.2})",
                light.kind.label(),
                light.color,
                light.intensity,
                light.position.x,
                light.position.y,
                light.position.z
            );
        }
    }
    print!("{}", panel.describe());

    lab.shutdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_edit_parsing() {
        let edit = PanelEdit::parse("Point Light/intensity = 0.9").unwrap();
        assert_eq!(edit.folder, "Point Light");
        assert_eq!(edit.label, "intensity");
        assert_eq!(edit.value, "0.9");

        assert!(PanelEdit::parse("Point Light intensity=0.9").is_err());
        assert!(PanelEdit::parse("Point Light/intensity").is_err());
    }

    #[test]
    fn test_bundled_rig_file_loads() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/rig.ron");
        let config = RigConfig::load_from_file(path).unwrap();

        assert_eq!(config.frames, Some(240));
        assert_eq!(config.viewport.width, 1280);
        let kinds: Vec<LightKind> = config.lights.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![LightKind::Ambient, LightKind::Directional, LightKind::Hemisphere, LightKind::Point, LightKind::Spot]
        );
        for descriptor in &config.lights {
            LightRegistry::validate(descriptor).unwrap();
        }
    }

    #[test]
    fn test_default_rig_finds_its_texture() {
        let mut panel = DebugPanel::new();
        let lab = LightLab::build(
            &RigConfig::default(),
            HeadlessBackend::new(),
            StaticControls,
            TextureManager::default().with_asset_root(DEFAULT_ASSETS),
            &mut panel,
        );

        assert!(lab.issues().is_empty(), "{:?}", lab.issues());
        assert!(lab.context().scene.material().borrow().map.is_some());
    }
}
