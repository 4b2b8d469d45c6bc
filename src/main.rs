use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use texturegen::output::{self, OutputError};
use texturegen::texture::{checkerboard, face, wall};

#[derive(Parser, Debug)]
#[command(name = "texturegen")]
#[command(version, about = "Procedural texture generator for game prototyping")]
struct Cli {
    /// Texture to generate
    #[command(subcommand)]
    texture: Texture,

    /// Directory to write into (defaults to the desktop)
    #[arg(long, short = 'o', value_name = "DIR", global = true)]
    output_dir: Option<PathBuf>,

    /// Seed for the random passes (unset: seeded from entropy)
    #[arg(long, value_name = "SEED", global = true)]
    seed: Option<u64>,

    /// Skip opening the result in the default image viewer
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    no_open: bool,
}

#[derive(Subcommand, Debug)]
enum Texture {
    /// Checkerboard floor texture (floor_texture.png)
    Floor,
    /// Smiley-face sprite (happy_face_texture.png)
    Face,
    /// Noisy cement wall (cement_texture.png)
    Cement,
    /// All three textures
    All,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let directory = match &cli.output_dir {
        Some(dir) => dir.clone(),
        None => output::default_output_dir()?,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut written = Vec::new();
    match cli.texture {
        Texture::Floor => written.push(generate_floor(&directory)?),
        Texture::Face => written.push(generate_face(&directory)?),
        Texture::Cement => written.push(generate_cement(&directory, &mut rng)?),
        Texture::All => {
            written.push(generate_floor(&directory)?);
            written.push(generate_face(&directory)?);
            written.push(generate_cement(&directory, &mut rng)?);
        }
    }

    for path in &written {
        println!("Texture saved to: {}", path.display());
        if !cli.no_open {
            output::open_in_viewer(path);
        }
    }

    Ok(())
}

fn generate_floor(directory: &Path) -> Result<PathBuf, OutputError> {
    log::info!("Generating checkerboard floor texture");
    let texture = checkerboard::generate(&checkerboard::CheckerboardParams::default());
    output::save_texture(&texture, directory, checkerboard::FILE_NAME)
}

fn generate_face(directory: &Path) -> Result<PathBuf, OutputError> {
    log::info!("Generating smiley-face sprite");
    let texture = face::generate(&face::FaceParams::default());
    output::save_texture(&texture, directory, face::FILE_NAME)
}

fn generate_cement(directory: &Path, rng: &mut StdRng) -> Result<PathBuf, OutputError> {
    log::info!("Generating cement wall texture");
    let texture = wall::generate(&wall::WallParams::default(), rng);
    output::save_texture(&texture, directory, wall::FILE_NAME)
}
