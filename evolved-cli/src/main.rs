mod dirs;
mod error;

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use evolved_lib::error::RangeError;
use evolved_lib::export::huetone_url;
use evolved_lib::preset::{
    CURVES_KEY, Preset, PresetStorage, builtin_curves, find_curve_preset, preset_list,
};
use evolved_lib::project::{STORAGE_KEY, load_projects, save_projects};
use evolved_lib::stops::direction_label;
use evolved_lib::storage::{FileBackend, StorageBackend};
use evolved_lib::{ColorRamp, ColorSpaceType, Curve, ProjectPatch, ProjectStore, StopsConfig, name_stops};
use log::{debug, info};
use simplelog::LevelFilter;

use crate::dirs::AppDirs;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "evolved")]
#[command(version, about = "Perceptual color palette generator", long_about = None)]
struct Cli {
    /// Directory holding projects and presets
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a fresh default project store
    Init {
        /// Overwrite existing projects
        #[arg(long)]
        force: bool,
    },

    /// List projects, marking the active one
    Show,

    /// Add a color ramp to the active project
    AddRamp {
        /// Ramp name
        name: String,

        /// Key colors (any CSS color); none picks a random one
        #[arg(value_name = "COLORS")]
        colors: Vec<String>,
    },

    /// Print the swatches of a ramp
    Swatches {
        /// Ramp index in the active project
        #[arg(long, default_value = "0")]
        ramp: usize,
    },

    /// Name arbitrary lightness values
    Names {
        /// Lightness values in [0, 1]
        #[arg(value_name = "VALUES", required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Count names from the light end
        #[arg(long)]
        inverted: bool,
    },

    /// Print the gradient of a ramp
    Gradient {
        /// Ramp index in the active project
        #[arg(long, default_value = "0")]
        ramp: usize,

        /// Print as a CSS linear-gradient
        #[arg(long)]
        css: bool,
    },

    /// Print a Huetone link for the active project
    Export,

    /// Manage user curve presets
    Presets {
        #[command(subcommand)]
        command: PresetCommands,
    },

    /// Set the color space of the active project
    SetSpace {
        #[arg(value_enum)]
        space: SpaceArg,
    },

    /// Set the stop order of the active project
    Invert {
        #[arg(action = ArgAction::Set)]
        inverted: bool,
    },
}

#[derive(Subcommand)]
enum PresetCommands {
    /// List built-in and user curves
    List,

    /// Save the active project's curve
    Save { name: String },

    /// Delete a user curve
    Delete { id: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum SpaceArg {
    Oklab,
    #[value(name = "oklab_lr")]
    OklabLr,
}

impl From<SpaceArg> for ColorSpaceType {
    fn from(arg: SpaceArg) -> Self {
        match arg {
            SpaceArg::Oklab => ColorSpaceType::Oklab,
            SpaceArg::OklabLr => ColorSpaceType::OklabLr,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("{e}");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let dirs = AppDirs::resolve(cli.data_dir.clone())?;
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    match dirs.init_logging(level) {
        Ok(log) => debug!("logging to {}", log.display()),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }
    debug!("data directory: {}", dirs.data.display());
    let mut backend = FileBackend::new(dirs.data);

    match cli.command {
        Commands::Init { force } => cmd_init(&mut backend, force),
        Commands::Names { values, inverted } => {
            println!("{}", name_stops(&values, inverted).join(" "));
            Ok(())
        }
        Commands::Presets { command } => cmd_presets(backend, command),
        command => {
            let mut store = open_store(&backend)?;
            let dirty = Rc::new(Cell::new(false));
            let flag = Rc::clone(&dirty);
            store.subscribe(move |_| flag.set(true));

            run_store_command(&mut store, command)?;

            if dirty.get() {
                save_projects(&mut backend, &store.to_persisted())?;
                info!("saved {} projects", store.projects().len());
            }
            Ok(())
        }
    }
}

fn open_store(backend: &FileBackend) -> Result<ProjectStore, CliError> {
    match load_projects(backend) {
        Some(persisted) => Ok(ProjectStore::from_persisted(persisted)?),
        None => Ok(ProjectStore::default()),
    }
}

fn run_store_command(store: &mut ProjectStore, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Show => cmd_show(store),
        Commands::AddRamp { name, colors } => {
            let ramp = ColorRamp::new(&colors, name)?;
            println!("added {} with {} key colors", ramp.name(), ramp.key_colors().len());
            store.update_active(|project| project.color_ramps.push(ramp));
        }
        Commands::Swatches { ramp } => {
            for swatch in store.active().swatches(ramp)? {
                println!(
                    "{:>5}  {:.4}  {}  {}",
                    swatch.name, swatch.lightness, swatch.color, swatch.label
                );
            }
        }
        Commands::Gradient { ramp, css } => {
            let project = store.active();
            let ramp = project
                .color_ramps
                .get(ramp)
                .ok_or(RangeError::RampIndex(ramp))?;
            if css {
                println!("{}", ramp.css_gradient(project.space())?);
            } else {
                for color in ramp.gradient(project.space())? {
                    println!("{color}");
                }
            }
        }
        Commands::Export => {
            let palette = store.active().to_huetone()?;
            println!("{}", huetone_url(&palette)?);
        }
        Commands::SetSpace { space } => {
            store.update_project(ProjectPatch::new().color_space_type(space.into()));
        }
        Commands::Invert { inverted } => {
            store.update_project(ProjectPatch::new().is_inverted(inverted));
        }
        Commands::Init { .. } | Commands::Names { .. } | Commands::Presets { .. } => {}
    }
    Ok(())
}

fn cmd_init(backend: &mut FileBackend, force: bool) -> Result<(), CliError> {
    if !force && backend.get(STORAGE_KEY)?.is_some() {
        return Err(CliError::AlreadyInitialized(backend.path_for(STORAGE_KEY)));
    }
    save_projects(backend, &ProjectStore::default().to_persisted())?;
    println!("initialized {}", backend.path_for(STORAGE_KEY).display());
    Ok(())
}

fn cmd_show(store: &ProjectStore) {
    for (i, project) in store.projects().iter().enumerate() {
        let marker = if i == store.active_index() { '*' } else { ' ' };
        println!(
            "{} {:>2}  {}  ({}, {}, {}, {} ramps)",
            marker,
            i,
            project.name,
            project.color_space_type.label(),
            project.stops.stop_type().label(),
            direction_label(project.is_inverted),
            project.color_ramps.len()
        );
        for ramp in &project.color_ramps {
            let keys: Vec<_> = ramp.key_colors().iter().map(|k| k.serialize()).collect();
            println!("        {}: {}", ramp.name(), keys.join(" "));
        }
    }
}

fn cmd_presets(backend: FileBackend, command: PresetCommands) -> Result<(), CliError> {
    let mut storage: PresetStorage<Curve, _> = PresetStorage::load(CURVES_KEY, backend.clone());

    match command {
        PresetCommands::List => {
            let store = open_store(&backend)?;
            let current = match store.active().stops {
                StopsConfig::Bezier { curve, .. } => Some(curve),
                StopsConfig::Manual { .. } => None,
            };

            let builtins = builtin_curves();
            let builtin_list = preset_list(&builtins);
            let user_list = preset_list(storage.presets());
            let active = current
                .and_then(|curve| find_curve_preset(&curve, &[&builtin_list[..], &user_list[..]]))
                .map(|preset| preset.id.clone());

            for (kind, list) in [("builtin", &builtin_list), ("user", &user_list)] {
                for preset in list {
                    let marker = if active.as_deref() == Some(preset.id.as_str()) { '*' } else { ' ' };
                    println!("{} {:<8} {:<38} {}", marker, kind, preset.id, preset.name);
                }
            }
        }
        PresetCommands::Save { name } => {
            let store = open_store(&backend)?;
            let StopsConfig::Bezier { curve, .. } = store.active().stops else {
                return Err(CliError::NotBezier);
            };
            let preset = Preset::new(name, curve);
            println!("saved {}", preset.id);
            storage.add(preset)?;
        }
        PresetCommands::Delete { id } => {
            if !storage.delete(&id)? {
                return Err(CliError::UnknownPreset(id));
            }
            println!("deleted {id}");
        }
    }
    Ok(())
}
