//! Executes call effects and bridges completions back to the UI loop.
//!
//! `dispatch_call` announces the task on the inbox synchronously, spawns the
//! network work on the runtime, and delivers the completion to the same
//! inbox. The UI loop is the only consumer, so every state mutation caused
//! by a call happens on the UI-owning task, in submission order.

use std::sync::Arc;

use secondserve_core::ApiClient;

use crate::effects::ApiCall;
use crate::events::{TaskOutcome, UiEvent};
use crate::inbox::UiEventSender;
use crate::task::{TaskId, TaskKind, TaskSeq, TaskStarted};

pub struct Dispatcher {
    api: Arc<ApiClient>,
    tx: UiEventSender,
    seq: TaskSeq,
}

impl Dispatcher {
    pub fn new(api: Arc<ApiClient>, tx: UiEventSender) -> Self {
        Self {
            api,
            tx,
            seq: TaskSeq::default(),
        }
    }

    /// A sender handle for auxiliary producers (refresh timers).
    pub fn sender(&self) -> UiEventSender {
        self.tx.clone()
    }

    /// Spawns an API call as a background task.
    ///
    /// There is no cancellation of in-flight HTTP work; a stale completion
    /// still arrives and is filtered by the reducer's task state.
    pub fn dispatch_call(&mut self, kind: TaskKind, call: ApiCall) -> TaskId {
        let id = self.seq.next_id();
        let started = TaskStarted { id, cancel: None };
        let _ = self.tx.send(UiEvent::TaskStarted { kind, started });

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = execute_call(&api, call).await;
            let _ = tx.send(UiEvent::TaskCompleted { kind, id, outcome });
        });
        id
    }
}

/// Maps a declarative call onto the API client.
pub async fn execute_call(api: &ApiClient, call: ApiCall) -> TaskOutcome {
    match call {
        ApiCall::Login {
            email,
            password,
            role,
        } => TaskOutcome::Auth(api.login(&email, &password, role).await),
        ApiCall::RegisterHotel(hotel) => TaskOutcome::Auth(api.register_hotel(&hotel).await),
        ApiCall::RegisterNgo(ngo) => TaskOutcome::Auth(api.register_ngo(&ngo).await),
        ApiCall::RegisterStaff(staff) => TaskOutcome::Auth(api.register_staff(&staff).await),
        ApiCall::LoadHotels => TaskOutcome::Hotels(api.hotels().await),
        ApiCall::LoadHotel { id } => TaskOutcome::Hotel(api.hotel(id).await),
        ApiCall::SaveHotel { id, hotel } => TaskOutcome::Hotel(api.update_hotel(id, &hotel).await),
        ApiCall::LoadDashboardStats => TaskOutcome::DashboardStats(api.dashboard_stats().await),
        ApiCall::LoadFoodItems { hotel_id } => {
            TaskOutcome::FoodItems(api.food_items_for_hotel(hotel_id).await)
        }
        ApiCall::LoadPendingFoodItems { hotel_id } => {
            TaskOutcome::FoodItems(api.pending_food_items(hotel_id).await)
        }
        ApiCall::LoadTodaysFoodItems { hotel_id } => {
            TaskOutcome::FoodItems(api.todays_food_items(hotel_id).await)
        }
        ApiCall::LogFoodItem(item) => TaskOutcome::FoodItem(api.log_food_item(&item).await),
        ApiCall::ApproveFoodItem { id } => TaskOutcome::Unit(api.approve_food_item(id).await),
        ApiCall::DeleteFoodItem { id } => TaskOutcome::Unit(api.delete_food_item(id).await),
        ApiCall::SubmitFoodRequest(request) => {
            TaskOutcome::FoodRequest(api.submit_food_request(&request).await)
        }
        ApiCall::LoadHotelRequests { hotel_id } => {
            TaskOutcome::FoodRequests(api.hotel_food_requests(hotel_id).await)
        }
        ApiCall::LoadPendingHotelRequests { hotel_id } => {
            TaskOutcome::FoodRequests(api.pending_hotel_food_requests(hotel_id).await)
        }
        ApiCall::ApproveFoodRequest { id } => TaskOutcome::Unit(api.approve_food_request(id).await),
        ApiCall::RejectFoodRequest { id } => TaskOutcome::Unit(api.reject_food_request(id).await),
        ApiCall::CompleteFoodRequest { id } => {
            TaskOutcome::Unit(api.complete_food_request(id).await)
        }
        ApiCall::LoadNgoRequests { ngo_id } => {
            TaskOutcome::FoodRequests(api.ngo_food_requests(ngo_id).await)
        }
        ApiCall::LoadNgo { id } => TaskOutcome::Ngo(api.ngo(id).await),
        ApiCall::SaveNgo { id, ngo } => TaskOutcome::Ngo(api.update_ngo(id, &ngo).await),
    }
}
