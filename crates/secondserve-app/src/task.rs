//! Task lifecycle bookkeeping for the screens' logical actions.
//!
//! Each action kind allows at most one in-flight task. Starting an action
//! whose kind is already running is a no-op at the reducer level, which is
//! what closes the double-submission gap on action buttons. Completions are
//! only honored when their id matches the active task, so a stale response
//! cannot clobber the state of a newer one.

use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Logical actions a screen can have in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Login,
    Register,
    DashboardStats,
    FoodItemsLoad,
    FoodItemLog,
    FoodItemApprove,
    FoodItemDelete,
    RequestsLoad,
    RequestSubmit,
    RequestDecide,
    ProfileLoad,
    ProfileSave,
    HotelsLoad,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
}

/// Per-kind lifecycle state (stored with the screen, mutated only by its
/// reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
        self.cancel = started.cancel.clone();
    }

    /// Clears the state if `id` is the active task. Returns whether the
    /// completion belongs to the active task; stale ids leave the state
    /// untouched.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
            self.cancel = None;
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
    }
}

/// Registry of task states, one per kind.
#[derive(Debug, Default, Clone)]
pub struct Tasks {
    login: TaskState,
    register: TaskState,
    dashboard_stats: TaskState,
    food_items_load: TaskState,
    food_item_log: TaskState,
    food_item_approve: TaskState,
    food_item_delete: TaskState,
    requests_load: TaskState,
    request_submit: TaskState,
    request_decide: TaskState,
    profile_load: TaskState,
    profile_save: TaskState,
    hotels_load: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::Login => &self.login,
            TaskKind::Register => &self.register,
            TaskKind::DashboardStats => &self.dashboard_stats,
            TaskKind::FoodItemsLoad => &self.food_items_load,
            TaskKind::FoodItemLog => &self.food_item_log,
            TaskKind::FoodItemApprove => &self.food_item_approve,
            TaskKind::FoodItemDelete => &self.food_item_delete,
            TaskKind::RequestsLoad => &self.requests_load,
            TaskKind::RequestSubmit => &self.request_submit,
            TaskKind::RequestDecide => &self.request_decide,
            TaskKind::ProfileLoad => &self.profile_load,
            TaskKind::ProfileSave => &self.profile_save,
            TaskKind::HotelsLoad => &self.hotels_load,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Login => &mut self.login,
            TaskKind::Register => &mut self.register,
            TaskKind::DashboardStats => &mut self.dashboard_stats,
            TaskKind::FoodItemsLoad => &mut self.food_items_load,
            TaskKind::FoodItemLog => &mut self.food_item_log,
            TaskKind::FoodItemApprove => &mut self.food_item_approve,
            TaskKind::FoodItemDelete => &mut self.food_item_delete,
            TaskKind::RequestsLoad => &mut self.requests_load,
            TaskKind::RequestSubmit => &mut self.request_submit,
            TaskKind::RequestDecide => &mut self.request_decide,
            TaskKind::ProfileLoad => &mut self.profile_load,
            TaskKind::ProfileSave => &mut self.profile_save,
            TaskKind::HotelsLoad => &mut self.hotels_load,
        }
    }

    pub fn is_running(&self, kind: TaskKind) -> bool {
        self.state(kind).is_running()
    }
}
