//! Pattern 1: Adapter
//! Example: Unified Audio Player over Incompatible Interfaces
//!
//! Run with: cargo run --example p1_media_adapter

use structural_patterns::adapter::AudioPlayer;

fn main() {
    println!("=== Audio Player Adapter Demo ===\n");

    let player = AudioPlayer::new();
    let playlist = [
        ("mp3", "song.mp3"),
        ("mp4", "video.mp4"),
        ("vlc", "movie.vlc"),
        ("wav", "sound.wav"),
        ("avi", "unsupported.avi"),
    ];

    for (format, filename) in playlist {
        println!("{}", player.play(format, filename));
    }
}
