use chrono::{DateTime, Utc};

use crate::domain::{Channel, ChannelId, LiveGuideRow, RegionCounts, RegionId, ScheduleEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Map,
    Channels,
    ChannelDetail,
}

/// Where the user is. Each variant carries exactly the selections that view
/// needs, so "a channel without a region" cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Navigation {
    #[default]
    Map,
    Channels {
        region: RegionId,
    },
    ChannelDetail {
        region: RegionId,
        channel: ChannelId,
    },
}

impl Navigation {
    pub fn view(&self) -> View {
        match self {
            Navigation::Map => View::Map,
            Navigation::Channels { .. } => View::Channels,
            Navigation::ChannelDetail { .. } => View::ChannelDetail,
        }
    }

    pub fn selected_region(&self) -> Option<RegionId> {
        match self {
            Navigation::Map => None,
            Navigation::Channels { region } | Navigation::ChannelDetail { region, .. } => {
                Some(*region)
            }
        }
    }

    pub fn selected_channel(&self) -> Option<&ChannelId> {
        match self {
            Navigation::ChannelDetail { channel, .. } => Some(channel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct App {
    pub nav: Navigation,
    pub help_visible: bool,
    pub loading: bool,
    pub status: String,

    pub region_counts: RegionCounts,
    pub map_cursor: RegionId,

    /// Channel list of the selected region, from the last successful fetch.
    pub channels: Vec<Channel>,
    pub guide: Vec<LiveGuideRow>,
    pub guide_selected: usize,
    pub guide_updated_at: Option<DateTime<Utc>>,

    pub schedule: Vec<ScheduleEntry>,
    pub schedule_scroll: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            nav: Navigation::Map,
            help_visible: false,
            loading: false,
            status: MAP_HINT.to_owned(),
            region_counts: RegionCounts::default(),
            map_cursor: RegionId::NorthAmerica,
            channels: Vec::new(),
            guide: Vec::new(),
            guide_selected: 0,
            guide_updated_at: None,
            schedule: Vec::new(),
            schedule_scroll: 0,
        }
    }
}

pub const MAP_HINT: &str = "Pick a region: arrows to move, Enter to open";
pub const GUIDE_HINT: &str = "Enter opens a channel schedule, Esc goes back to the map";
pub const DETAIL_HINT: &str = "Up/Down scroll, Esc goes back to the guide";

impl App {
    pub fn view(&self) -> View {
        self.nav.view()
    }

    pub fn find_channel(&self, id: &ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| &c.id == id)
    }

    pub fn selected_channel(&self) -> Option<&Channel> {
        self.nav.selected_channel().and_then(|id| self.find_channel(id))
    }
}

/// Render-side copy of [`App`]. Only the active view's data is cloned.
#[derive(Debug, Clone)]
pub struct AppSnapshot {
    pub nav: Navigation,
    pub help_visible: bool,
    pub loading: bool,
    pub status: String,
    pub view_state: AppViewSnapshot,
}

#[derive(Debug, Clone)]
pub enum AppViewSnapshot {
    Map(MapSnapshot),
    Channels(GuideSnapshot),
    ChannelDetail(DetailSnapshot),
}

#[derive(Debug, Clone)]
pub struct MapSnapshot {
    pub counts: RegionCounts,
    pub cursor: RegionId,
}

#[derive(Debug, Clone)]
pub struct GuideSnapshot {
    pub region: RegionId,
    pub rows: Vec<LiveGuideRow>,
    pub selected: usize,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct DetailSnapshot {
    pub region: RegionId,
    pub channel: Option<Channel>,
    pub entries: Vec<ScheduleEntry>,
    pub scroll: usize,
}

impl AppSnapshot {
    pub fn from_app(app: &App) -> Self {
        let view_state = match &app.nav {
            Navigation::Map => AppViewSnapshot::Map(MapSnapshot {
                counts: app.region_counts.clone(),
                cursor: app.map_cursor,
            }),
            Navigation::Channels { region } => AppViewSnapshot::Channels(GuideSnapshot {
                region: *region,
                rows: app.guide.clone(),
                selected: app.guide_selected,
                updated_at: app.guide_updated_at,
            }),
            Navigation::ChannelDetail { region, .. } => {
                AppViewSnapshot::ChannelDetail(DetailSnapshot {
                    region: *region,
                    channel: app.selected_channel().cloned(),
                    entries: app.schedule.clone(),
                    scroll: app.schedule_scroll,
                })
            }
        };

        Self {
            nav: app.nav.clone(),
            help_visible: app.help_visible,
            loading: app.loading,
            status: app.status.clone(),
            view_state,
        }
    }

    pub fn view(&self) -> View {
        self.nav.view()
    }

    /// Breadcrumb for the header: `World > Europe > Euro News 24`.
    pub fn breadcrumb(&self) -> String {
        let mut parts = vec!["World".to_owned()];
        if let Some(region) = self.nav.selected_region() {
            parts.push(crate::domain::region_info(region).name.to_owned());
        }
        if let AppViewSnapshot::ChannelDetail(d) = &self.view_state {
            match &d.channel {
                Some(c) => parts.push(c.name.clone()),
                None => parts.push("?".to_owned()),
            }
        }
        parts.join(" > ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_accessors() {
        let nav = Navigation::ChannelDetail {
            region: RegionId::Asia,
            channel: ChannelId::new("c9"),
        };
        assert_eq!(nav.view(), View::ChannelDetail);
        assert_eq!(nav.selected_region(), Some(RegionId::Asia));
        assert_eq!(nav.selected_channel().map(ChannelId::as_str), Some("c9"));

        let nav = Navigation::Channels {
            region: RegionId::Africa,
        };
        assert_eq!(nav.selected_channel(), None);
        assert_eq!(Navigation::default().view(), View::Map);
    }

    #[test]
    fn snapshot_only_carries_active_view() {
        let app = App::default();
        let snap = AppSnapshot::from_app(&app);
        assert!(matches!(snap.view_state, AppViewSnapshot::Map(_)));
        assert_eq!(snap.breadcrumb(), "World");

        let app = App {
            nav: Navigation::Channels {
                region: RegionId::Europe,
            },
            ..App::default()
        };
        let snap = AppSnapshot::from_app(&app);
        assert!(matches!(snap.view_state, AppViewSnapshot::Channels(_)));
        assert_eq!(snap.breadcrumb(), "World > Europe");
    }
}
