pub mod ids;
pub mod model;
pub mod regions;

pub use ids::{ChannelId, RegionId};
pub use model::{
    Channel, LiveGuideRow, NowPlaying, Program, ProgramType, RegionCount, ScheduleEntry, UpNext,
};
pub use regions::{REGION_CATALOG, RegionCounts, RegionInfo, region_info};
