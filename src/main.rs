mod library;
mod play_music;
mod spotify;

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{CommandFactory, Parser, Subcommand};

use crate::library::EXPORT_FIELDS;

/// Compare your Spotify and Google Play Music libraries
#[derive(Parser)]
#[command(version, author, about, long_about = None)]
struct Cli {
    /// Write a CSV file of the Spotify library
    #[arg(short, long)]
    spotify: bool,

    /// Write a CSV file of the Google Play Music library
    #[arg(short, long)]
    gpm: bool,

    /// Create two CSV files showing tracks that are in Spotify but missing
    /// from Google Play Music and vice versa
    #[arg(short, long)]
    compare: bool,

    /// Directory to write CSV files
    #[arg(short, long, default_value = ".")]
    outdir: PathBuf,

    /// Spotify Web API access token with the `user-library-read` scope
    #[arg(long)]
    spotify_token: Option<String>,

    /// Google Play Music mobile client OAuth access token
    #[arg(long)]
    gpm_token: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// The shell to generate the completions for
        #[arg(value_enum)]
        shell: clap_complete_command::Shell,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        shell.generate(&mut Cli::command(), &mut std::io::stdout());
        return Ok(());
    }

    let gpm_library = if cli.compare || cli.gpm {
        let token = cli
            .gpm_token
            .as_deref()
            .context("--gpm-token is required to read the Google Play Music library")?;
        ensure!(
            play_music::validate_access_token(token),
            "invalid Google Play Music access token",
        );
        let client = play_music::Client::new(token)?;
        println!("Getting your Google Play Music library...");
        let track_feed = client.get_all_tracks().await?;
        println!("Building a model of your Google Play Music library...");
        let library = play_music::transform(track_feed);
        println!("{} tracks", library.len());
        Some(library)
    } else {
        None
    };

    if cli.gpm {
        if let Some(library) = &gpm_library {
            let outfile = cli.outdir.join("google_play_music_export.csv");
            println!("Writing {}...", outfile.display());
            library.write_csv_file(&outfile, &EXPORT_FIELDS)?;
            println!("Wrote {}", outfile.display());
        }
    }

    let spotify_library = if cli.compare || cli.spotify {
        let token = cli
            .spotify_token
            .as_deref()
            .context("--spotify-token is required to read the Spotify library")?;
        ensure!(
            spotify::validate_access_token(token),
            "invalid Spotify access token",
        );
        let client = spotify::Client::new(token)?;
        println!("Getting your Spotify library...");
        let saved_tracks = client.get_saved_tracks().await?;
        println!("Building a model of your Spotify library...");
        let library = spotify::transform(saved_tracks);
        println!("{} tracks", library.len());
        Some(library)
    } else {
        None
    };

    if cli.compare {
        if let (Some(spotify_library), Some(gpm_library)) = (&spotify_library, &gpm_library) {
            println!("Finding unique Spotify tracks...");
            let spotify_unique = spotify_library.diff(gpm_library);
            let outfile = cli.outdir.join("spotify_unique_tracks.csv");
            println!("Writing {}", outfile.display());
            spotify_unique.write_csv_file(&outfile, &EXPORT_FIELDS)?;

            println!("Finding unique Google Play Music tracks...");
            let gpm_unique = gpm_library.diff(spotify_library);
            let outfile = cli.outdir.join("gpm_unique_tracks.csv");
            println!("Writing {}", outfile.display());
            gpm_unique.write_csv_file(&outfile, &EXPORT_FIELDS)?;
        }
    }

    if cli.spotify {
        if let Some(library) = &spotify_library {
            let outfile = cli.outdir.join("spotify_export.csv");
            println!("Writing {}...", outfile.display());
            library.write_csv_file(&outfile, &EXPORT_FIELDS)?;
            println!("Wrote {}", outfile.display());
        }
    }

    Ok(())
}
