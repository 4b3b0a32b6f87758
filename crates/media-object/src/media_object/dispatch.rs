//! Interface command dispatch
//!
//! Titles and angles are fixed: one title (numbered 1), one angle
//! (numbered 0). Navigation menus are accepted and ignored. Subtitle
//! encoding and font are reported as "UTF" and "default"; setters for them
//! are accepted without effect.

use super::MediaObject;
use crate::engine::Engine;
use crate::interface::{
    AngleCommand, AudioChannelCommand, ChapterCommand, Interface, InterfaceCommand,
    InterfaceReply, NavigationCommand, SubtitleCommand, TitleCommand,
};
use mediabridge_core::{GlobalTrackId, TrackKind};

impl<E: Engine> MediaObject<E> {
    pub fn has_interface(&self, _interface: Interface) -> bool {
        true
    }

    pub fn interface_call(&mut self, command: InterfaceCommand) -> InterfaceReply {
        match command {
            InterfaceCommand::Navigation(command) => self.navigation_call(command),
            InterfaceCommand::Chapter(command) => self.chapter_call(command),
            InterfaceCommand::Angle(command) => match command {
                AngleCommand::AvailableAngles => InterfaceReply::Count(1),
                AngleCommand::Angle => InterfaceReply::Index(0),
                AngleCommand::SetAngle(_) => InterfaceReply::Accepted(true),
            },
            InterfaceCommand::Title(command) => match command {
                TitleCommand::AvailableTitles => InterfaceReply::Count(1),
                TitleCommand::Title => InterfaceReply::Index(1),
                TitleCommand::AutoplayTitles => InterfaceReply::Flag(false),
                TitleCommand::SetTitle(_) | TitleCommand::SetAutoplayTitles(_) => {
                    InterfaceReply::Accepted(true)
                }
            },
            InterfaceCommand::Subtitle(command) => self.subtitle_call(command),
            InterfaceCommand::AudioChannel(command) => self.audio_channel_call(command),
        }
    }

    fn navigation_call(&mut self, command: NavigationCommand) -> InterfaceReply {
        match command {
            NavigationCommand::AvailableMenus => InterfaceReply::Menus(Vec::new()),
            NavigationCommand::SetMenu(menu) => {
                log::debug!("Ignoring menu request {:?}", menu);
                InterfaceReply::Accepted(true)
            }
        }
    }

    fn chapter_call(&mut self, command: ChapterCommand) -> InterfaceReply {
        match command {
            ChapterCommand::AvailableChapters => {
                InterfaceReply::Count(self.chapters.chapter_count())
            }
            ChapterCommand::Chapter => InterfaceReply::Index(self.chapters.current_chapter_index()),
            ChapterCommand::SetChapter(index) => match self.set_chapter(index) {
                Ok(()) => InterfaceReply::Accepted(true),
                Err(e) => {
                    log::warn!("{}", e);
                    InterfaceReply::Accepted(false)
                }
            },
        }
    }

    fn subtitle_call(&mut self, command: SubtitleCommand) -> InterfaceReply {
        match command {
            SubtitleCommand::AvailableSubtitles => {
                InterfaceReply::Tracks(self.registry.list_for(self.id, TrackKind::Subtitle))
            }
            SubtitleCommand::CurrentSubtitle => {
                let current = self.engine.active_subtitle_track().and_then(|local| {
                    self.registry
                        .description_for(self.id, local, TrackKind::Subtitle)
                });
                InterfaceReply::Track(current)
            }
            SubtitleCommand::SetCurrentSubtitle(global_id) => {
                InterfaceReply::Accepted(self.select_track(global_id, TrackKind::Subtitle))
            }
            SubtitleCommand::SubtitleEncoding => InterfaceReply::Text("UTF".to_string()),
            SubtitleCommand::SubtitleFont => InterfaceReply::Text("default".to_string()),
            SubtitleCommand::SubtitleAutodetect => InterfaceReply::Flag(true),
            SubtitleCommand::SetCurrentSubtitleFile(_)
            | SubtitleCommand::SetSubtitleAutodetect(_)
            | SubtitleCommand::SetSubtitleEncoding(_)
            | SubtitleCommand::SetSubtitleFont(_) => InterfaceReply::Accepted(true),
        }
    }

    fn audio_channel_call(&mut self, command: AudioChannelCommand) -> InterfaceReply {
        match command {
            AudioChannelCommand::AvailableAudioChannels => {
                InterfaceReply::Tracks(self.registry.list_for(self.id, TrackKind::Audio))
            }
            AudioChannelCommand::CurrentAudioChannel => {
                let current = self.engine.active_audio_track().and_then(|local| {
                    self.registry
                        .description_for(self.id, local, TrackKind::Audio)
                });
                InterfaceReply::Track(current)
            }
            AudioChannelCommand::SetCurrentAudioChannel(global_id) => {
                InterfaceReply::Accepted(self.select_track(global_id, TrackKind::Audio))
            }
        }
    }

    /// Activates a registered track on the engine; ids of other objects are refused
    fn select_track(&mut self, global_id: GlobalTrackId, kind: TrackKind) -> bool {
        let local = match self.registry.resolve(self.id, global_id, kind) {
            Ok(local) => local,
            Err(e) => {
                log::warn!("Not selecting {} track: {}", kind, e);
                return false;
            }
        };
        match kind {
            TrackKind::Audio => self.engine.set_active_audio_track(local),
            TrackKind::Subtitle => self.engine.set_active_subtitle_track(local),
        }
        true
    }
}
