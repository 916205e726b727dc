use tilemap_trainer::*;

use flexi_logger::{default_format, Duplicate, FileSpec, Logger};
use std::path::{Path, PathBuf};

#[derive(structopt::StructOpt)]
struct Args {
    /// A log config string, e.g. "info" or "debug, tilemap_trainer = trace".
    #[structopt(short, long)]
    log: Option<String>,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Paint every neighbour permutation into a template grid.
    Generate {
        /// Where to write the template grid as JSON.
        #[structopt(long, parse(from_os_str))]
        grid: Option<PathBuf>,

        /// Where to write a PNG preview of the template.
        #[structopt(long, parse(from_os_str))]
        image: Option<PathBuf>,

        /// Pixel size of one cell in the preview.
        #[structopt(long, default_value = "32")]
        tile_size: u32,

        #[structopt(long, default_value = "0")]
        layer: usize,

        #[structopt(flatten)]
        layout: LayoutArgs,
    },
    /// Read the tile painted for each permutation and save the coordinate table.
    Analyze {
        /// Grid JSON with one tile painted at each pattern placement.
        #[structopt(parse(from_os_str))]
        grid_path: PathBuf,

        /// Path of the coordinate table to write.
        #[structopt(parse(from_os_str))]
        output_path: PathBuf,

        #[structopt(long, default_value = "0")]
        layer: usize,

        /// Directory that "res://" paths are relative to.
        #[structopt(long, parse(from_os_str))]
        project_root: Option<PathBuf>,

        #[structopt(flatten)]
        layout: LayoutArgs,
    },
    /// Print a saved coordinate table.
    Show {
        #[structopt(parse(from_os_str))]
        coords_path: PathBuf,

        /// Directory that "res://" paths are relative to.
        #[structopt(long, parse(from_os_str))]
        project_root: Option<PathBuf>,
    },
}

#[derive(structopt::StructOpt)]
struct LayoutArgs {
    /// Grid cell of pattern 0.
    #[structopt(long, default_value = "2", allow_hyphen_values = true)]
    origin_x: i32,

    #[structopt(long, default_value = "2", allow_hyphen_values = true)]
    origin_y: i32,

    /// Cells between two pattern placements.
    #[structopt(long, default_value = "4")]
    spacing: i32,

    /// Patterns per row.
    #[structopt(long, default_value = "16")]
    columns: usize,
}

impl LayoutArgs {
    fn layout(&self) -> Result<GridLayout, Error> {
        GridLayout::new(
            Point::new(self.origin_x, self.origin_y),
            self.spacing,
            self.columns,
        )
    }
}

#[paw::main]
fn main(args: Args) -> Result<(), Error> {
    let _logger = args.log.as_ref().map(|log_config| {
        Logger::try_with_str(log_config.as_str())
            .and_then(|logger| {
                logger
                    .log_to_file(FileSpec::default())
                    .duplicate_to_stderr(Duplicate::Warn)
                    .format(default_format)
                    .start()
            })
            .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e))
    });

    match args.command {
        Command::Generate {
            grid,
            image,
            tile_size,
            layer,
            layout,
        } => generate(grid, image, tile_size, layer, &layout.layout()?),
        Command::Analyze {
            grid_path,
            output_path,
            layer,
            project_root,
            layout,
        } => analyze(
            &resolve_path(&grid_path, project_root.as_deref()),
            &resolve_path(&output_path, project_root.as_deref()),
            layer,
            &layout.layout()?,
        ),
        Command::Show {
            coords_path,
            project_root,
        } => show(&resolve_path(&coords_path, project_root.as_deref())),
    }
}

fn generate(
    grid_path: Option<PathBuf>,
    image_path: Option<PathBuf>,
    tile_size: u32,
    layer: usize,
    layout: &GridLayout,
) -> Result<(), Error> {
    let permutations = generate_all();
    println!("Generated {} permutations", permutations.num_elements());

    let mut grid = SparseGrid::new();
    paint_template(
        &mut grid,
        layer,
        layout,
        &permutations,
        &OffsetGroup::neighbours(),
        &TemplateMarkers::default(),
    );

    if let Some(grid_path) = grid_path {
        println!("Writing {:?}", grid_path);
        grid.save(grid_path)?;
    }

    if let Some(image_path) = image_path {
        if let Some(img) = image_from_grid(&grid, layer, tile_size)? {
            println!("Writing {:?}", image_path);
            img.save(&image_path)?;
        }
    }

    Ok(())
}

fn analyze(
    grid_path: &Path,
    output_path: &Path,
    layer: usize,
    layout: &GridLayout,
) -> Result<(), Error> {
    let num_patterns = 1 << NUM_NEIGHBOURS;
    let grid = SparseGrid::load(grid_path)?;
    let table = read_coordinate_table(&grid, layer, layout, num_patterns);

    println!("Saving texture coordinates to {:?}", output_path);
    table.save(output_path)?;

    let missing = table.missing(num_patterns);
    if !missing.is_empty() {
        println!("{} patterns have no tile painted", missing.len());
    }

    Ok(())
}

fn show(coords_path: &Path) -> Result<(), Error> {
    let table = CoordinateTable::load_for_slots(coords_path, NUM_NEIGHBOURS)?;
    for (index, atlas_coords) in table.iter() {
        println!("{}: {}", index, atlas_coords);
    }

    let missing = table.missing(1 << NUM_NEIGHBOURS);
    if !missing.is_empty() {
        let missing: Vec<String> = missing.iter().map(|i| i.to_string()).collect();
        println!("Missing: {}", missing.join(", "));
    }

    Ok(())
}

/// Host engines address project files as `res://relative/path`. Those are resolved against the
/// project root (or the working directory); every other path is used as given.
fn resolve_path(path: &Path, project_root: Option<&Path>) -> PathBuf {
    const HOST_SCHEME: &str = "res://";

    match path.to_str().and_then(|p| p.strip_prefix(HOST_SCHEME)) {
        Some(relative) => match project_root {
            Some(root) => root.join(relative),
            None => PathBuf::from(relative),
        },
        None => path.to_path_buf(),
    }
}
