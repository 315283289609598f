//! Adapter.
//!
//! `AudioPlayer` presents one `play(format, file)` operation over two
//! incompatible backends: the legacy mp3-only player and the advanced
//! player reached through [`MediaAdapter`].

/// The legacy interface: mp3 and nothing else.
pub struct Mp3Player;

impl Mp3Player {
    pub fn play_mp3(&self, filename: &str) -> String {
        format!("Playing MP3 file: {filename}")
    }
}

/// The advanced capability set the adapter wraps.
pub trait AdvancedPlayer {
    fn play_vlc(&self, filename: &str) -> String;
    fn play_mp4(&self, filename: &str) -> String;
    fn play_wav(&self, filename: &str) -> String;
}

#[derive(Default)]
pub struct AdvancedAudioPlayer;

impl AdvancedPlayer for AdvancedAudioPlayer {
    fn play_vlc(&self, filename: &str) -> String {
        format!("Playing VLC file: {filename}")
    }

    fn play_mp4(&self, filename: &str) -> String {
        format!("Playing MP4 file: {filename}")
    }

    fn play_wav(&self, filename: &str) -> String {
        format!("Playing WAV file: {filename}")
    }
}

/// Dispatches non-mp3 formats onto the advanced player.
pub struct MediaAdapter {
    advanced: Box<dyn AdvancedPlayer>,
}

impl MediaAdapter {
    pub fn new(advanced: Box<dyn AdvancedPlayer>) -> Self {
        MediaAdapter { advanced }
    }

    pub fn play(&self, format: &str, filename: &str) -> String {
        match format {
            "vlc" => self.advanced.play_vlc(filename),
            "mp4" => self.advanced.play_mp4(filename),
            "wav" => self.advanced.play_wav(filename),
            other => format!("Invalid media. {other} format not supported"),
        }
    }
}

/// The client-facing player: mp3 natively, everything else via the adapter.
pub struct AudioPlayer {
    mp3: Mp3Player,
    adapter: MediaAdapter,
}

impl Default for AudioPlayer {
    fn default() -> Self {
        AudioPlayer {
            mp3: Mp3Player,
            adapter: MediaAdapter::new(Box::new(AdvancedAudioPlayer)),
        }
    }
}

impl AudioPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&self, format: &str, filename: &str) -> String {
        if format == "mp3" {
            self.mp3.play_mp3(filename)
        } else {
            self.adapter.play(format, filename)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_each_known_format() {
        let player = AudioPlayer::new();
        assert_eq!(player.play("mp3", "song.mp3"), "Playing MP3 file: song.mp3");
        assert_eq!(player.play("mp4", "video.mp4"), "Playing MP4 file: video.mp4");
        assert_eq!(player.play("vlc", "movie.vlc"), "Playing VLC file: movie.vlc");
        assert_eq!(player.play("wav", "sound.wav"), "Playing WAV file: sound.wav");
    }

    #[test]
    fn unknown_format_is_a_diagnostic_not_a_panic() {
        let player = AudioPlayer::new();
        assert_eq!(
            player.play("avi", "unsupported.avi"),
            "Invalid media. avi format not supported"
        );
    }
}
