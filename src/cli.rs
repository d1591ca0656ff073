use crate::render::OutputFormat;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "playlist-formatter", version, about = "YouTube Playlist Formatter")]
pub struct Cli {
    /// YouTube playlist ID
    #[arg(long)]
    pub playlist: String,

    /// YouTube API key. Falls back to the YT_API_KEY environment variable.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Md)]
    pub format: OutputFormat,

    /// Append a row with the total duration of the playlist
    #[arg(long)]
    pub include_total_duration: bool,

    /// Override the API base URL. Falls back to YOUTUBE_API_BASE.
    #[arg(long, hide = true)]
    pub api_base: Option<String>,
}
