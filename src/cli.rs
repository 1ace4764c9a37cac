use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pencil_geom::Vec3;
use pencil_io::{GridStore, PencilConfig, load_config, write_obj};
use pencil_pivot::{DrawHistory, Side, analyze_borders};
use pencil_runtime::Pipeline;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::ascii::{parse_ascii, render_ascii};

#[derive(Parser, Debug)]
#[command(name = "pencil", version, about = "Turn painted grids into extruded meshes")]
pub struct Cli {
    /// Config file; defaults are used when it does not exist
    #[arg(long, default_value = "pencil.toml")]
    pub config: PathBuf,

    /// Debug logging for every subsystem
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Store an ASCII drawing as a grid
    Import {
        ascii: PathBuf,
        /// Stored grid name (defaults to the config's storage name)
        #[arg(long)]
        name: Option<String>,
    },
    /// Generate the solid for a stored grid
    Build {
        #[arg(long)]
        name: Option<String>,
        /// Write the mesh as Wavefront OBJ
        #[arg(long)]
        obj: Option<PathBuf>,
        /// Cursor samples for the draw-point pivots, as `x,y[,z]`
        #[arg(long = "stroke", value_parser = parse_point)]
        stroke: Vec<Vec3>,
        /// Seed for the touching pivots
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a stored grid and its borders
    Show {
        #[arg(long)]
        name: Option<String>,
    },
}

fn parse_point(s: &str) -> Result<Vec3, String> {
    let parts: Vec<f32> = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("bad point {s:?}: {e}"))?;
    match parts[..] {
        [x, y] => Ok(Vec3::new(x, y, 0.0)),
        [x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(format!("expected x,y or x,y,z, got {s:?}")),
    }
}

pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let cfg = load_config(&cli.config)?;
    let store = GridStore::new(&cfg.storage.root);
    match cli.command {
        Command::Import { ascii, name } => {
            let name = name.unwrap_or_else(|| cfg.storage.name.clone());
            let text = fs::read_to_string(&ascii)?;
            let grid = parse_ascii(&text)?;
            let path = store.save(&cfg.storage.folder, &name, &grid)?;
            println!(
                "imported {}x{} grid ({} painted) to {}",
                grid.width(),
                grid.depth(),
                grid.occupied_count(),
                path.display()
            );
        }
        Command::Build {
            name,
            obj,
            stroke,
            seed,
        } => {
            let name = name.unwrap_or_else(|| cfg.storage.name.clone());
            build(&cfg, &store, &name, obj, &stroke, seed)?;
        }
        Command::Show { name } => {
            let name = name.unwrap_or_else(|| cfg.storage.name.clone());
            let grid = store.load(&cfg.storage.folder, &name)?;
            print!("{}", render_ascii(&grid));
            let b = analyze_borders(&grid);
            println!(
                "left={} right={} top={} bottom={}",
                b.left, b.right, b.top, b.bottom
            );
            for side in Side::ALL {
                let pts: Vec<String> = b
                    .touches(side)
                    .iter()
                    .map(|p| format!("({},{})", p.horizontal, p.vertical))
                    .collect();
                println!("{side:?}: {}", pts.join(" "));
            }
        }
    }
    Ok(())
}

fn build(
    cfg: &PencilConfig,
    store: &GridStore,
    name: &str,
    obj: Option<PathBuf>,
    stroke: &[Vec3],
    seed: Option<u64>,
) -> Result<(), Box<dyn Error>> {
    let grid = store.load(&cfg.storage.folder, name)?;
    let pipeline = Pipeline::new(cfg.clone())?;

    let mut history = DrawHistory::new();
    if let (Some(first), Some(last)) = (stroke.first(), stroke.last()) {
        let area = pipeline.canvas_area(&grid);
        history.begin(*first);
        for &p in stroke {
            history.sample(&area, p);
        }
        history.finish(*last);
    }

    let out = match seed {
        Some(s) => pipeline.generate_with_rng(&grid, &history, &mut StdRng::seed_from_u64(s))?,
        None => pipeline.generate(&grid, &history)?,
    };

    println!(
        "mesh: {} faces, {} triangles, {} vertices",
        out.mesh.face_count(),
        out.mesh.triangle_count(),
        out.mesh.vertex_count()
    );
    if let Some(bb) = out.mesh.bounds() {
        println!(
            "bounds: {:?} .. {:?} (center {:?}, size {:?})",
            bb.min,
            bb.max,
            bb.center(),
            bb.size()
        );
    }
    if let Some(shape) = &out.collision {
        println!(
            "collision: {} boxes, rigid body: {}",
            shape.volumes().len(),
            shape.has_rigid_body()
        );
        if let Some(bb) = shape.bounds() {
            println!("collision bounds: {:?} .. {:?}", bb.min, bb.max);
        }
    }
    let root = out.root_transform();
    println!(
        "root: position {:?} rotation {:?} scale {:?}",
        root.position, root.rotation_euler_deg, root.scale
    );
    if let Some(path) = obj {
        write_obj(&path, &out.mesh, name)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
