use crate::{ActivationKey, DebounceToken, RequestId, SourceRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// View mounted; carries the `search` value read from the location, if any.
    Mounted { search: Option<String> },
    /// User edited the search box (raw, every keystroke).
    SearchInput(String),
    /// A scheduled debounce delivery fired.
    DebounceElapsed { token: DebounceToken },
    /// User clicked Next.
    NextPage,
    /// User clicked Previous.
    PreviousPage,
    /// User clicked the grid/list switch.
    ViewModeToggled,
    /// User pressed a key while the grid/list switch had focus.
    ViewModeKey(ActivationKey),
    /// Records endpoint settled for a request.
    RecordsLoaded {
        request_id: RequestId,
        result: Result<Vec<SourceRecord>, String>,
    },
    /// Count endpoint settled for a request.
    CountLoaded {
        request_id: RequestId,
        result: Result<u64, String>,
    },
}
