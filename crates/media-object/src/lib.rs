//! Media Object - playback state machine between a host and a media engine

mod backend;
mod chapters;
mod engine;
mod error;
mod events;
mod interface;
mod media_object;
mod prober;
mod registry;
mod state;

pub use backend::Backend;
pub use chapters::ChapterList;
pub use engine::{Engine, EngineNotification, EngineStatus, EngineTrack};
pub use error::{MediaError, MediaResult};
pub use events::{EventBus, MediaEvent};
pub use interface::{
    AngleCommand, AudioChannelCommand, ChapterCommand, Interface, InterfaceCommand,
    InterfaceReply, NavigationCommand, NavigationMenu, SubtitleCommand, TitleCommand,
};
pub use media_object::MediaObject;
pub use prober::{parse_chapters, ChapterProbe, ChapterProber, ProbeOutcome, ProbeWorker};
pub use registry::TrackRegistry;
pub use state::TickState;

pub use mediabridge_core::{
    Chapter, CoreError, ErrorType, GlobalTrackId, MediaSource, MetaData, ObjectId, PlaybackState,
    TrackDescription, TrackKind,
};
