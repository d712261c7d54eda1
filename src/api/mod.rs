//! HTTP API module for the workday calendar.
//!
//! This module exposes day classification, month views, blank time sheets,
//! the region and holiday lists, dataset metadata and the absence legend as
//! JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_RANGE_DAYS, create_router};
pub use request::{CalendarRequest, HolidayQuery, MonthRequest, TimeSheetRequest};
pub use response::{
    ApiError, CalendarDay, CalendarResponse, CalendarSummary, DatasetInfo, HolidayInfo, RegionInfo,
    TimeSheetResponse,
};
pub use state::AppState;
