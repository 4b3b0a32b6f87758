//! Optional-feature interfaces a host can query on a media object
//!
//! Each interface has a closed set of commands. Queries come back as an
//! [`InterfaceReply`]; setters reply `Accepted(true)` unless the request
//! named something the object cannot act on.

use mediabridge_core::{GlobalTrackId, TrackDescription};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interface {
    Navigation,
    Chapter,
    Angle,
    Title,
    Subtitle,
    AudioChannel,
}

/// Disc menus a host may ask to jump to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMenu {
    RootMenu,
    TitleMenu,
    AudioMenu,
    SubtitleMenu,
    ChapterMenu,
    AngleMenu,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    AvailableMenus,
    SetMenu(NavigationMenu),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterCommand {
    AvailableChapters,
    Chapter,
    SetChapter(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AngleCommand {
    AvailableAngles,
    Angle,
    SetAngle(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleCommand {
    AvailableTitles,
    Title,
    SetTitle(usize),
    AutoplayTitles,
    SetAutoplayTitles(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtitleCommand {
    AvailableSubtitles,
    CurrentSubtitle,
    SetCurrentSubtitle(GlobalTrackId),
    SetCurrentSubtitleFile(PathBuf),
    SubtitleAutodetect,
    SetSubtitleAutodetect(bool),
    SubtitleEncoding,
    SetSubtitleEncoding(String),
    SubtitleFont,
    SetSubtitleFont(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioChannelCommand {
    AvailableAudioChannels,
    CurrentAudioChannel,
    SetCurrentAudioChannel(GlobalTrackId),
}

/// A command addressed to one interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceCommand {
    Navigation(NavigationCommand),
    Chapter(ChapterCommand),
    Angle(AngleCommand),
    Title(TitleCommand),
    Subtitle(SubtitleCommand),
    AudioChannel(AudioChannelCommand),
}

impl InterfaceCommand {
    pub fn interface(&self) -> Interface {
        match self {
            Self::Navigation(_) => Interface::Navigation,
            Self::Chapter(_) => Interface::Chapter,
            Self::Angle(_) => Interface::Angle,
            Self::Title(_) => Interface::Title,
            Self::Subtitle(_) => Interface::Subtitle,
            Self::AudioChannel(_) => Interface::AudioChannel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceReply {
    /// Outcome of a setter
    Accepted(bool),
    Count(usize),
    Index(usize),
    Flag(bool),
    Text(String),
    Menus(Vec<NavigationMenu>),
    Tracks(Vec<TrackDescription>),
    /// Current track, if the engine has one selected
    Track(Option<TrackDescription>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_interface() {
        let command = InterfaceCommand::Chapter(ChapterCommand::SetChapter(2));
        assert_eq!(command.interface(), Interface::Chapter);

        let command = InterfaceCommand::AudioChannel(AudioChannelCommand::AvailableAudioChannels);
        assert_eq!(command.interface(), Interface::AudioChannel);
    }
}
