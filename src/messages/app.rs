use crate::app::AppSnapshot;
use crate::domain::{ChannelId, RegionId};

#[derive(Debug)]
pub enum AppCommand {
    Bootstrap,
    MapCursorNext,
    MapCursorPrev,
    MapCursorSet { region: RegionId },
    SelectRegion { region: RegionId },
    GuideMoveUp,
    GuideMoveDown,
    GuideOpenSelected,
    SelectChannel { channel_id: ChannelId },
    DetailScrollUp,
    DetailScrollDown,
    Back,
    Refresh,
    UiToggleHelp,
    Quit,
}

#[derive(Debug)]
pub enum AppEvent {
    State(Box<AppSnapshot>),
}
