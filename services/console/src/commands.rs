//! Command execution
//!
//! Resource commands first navigate to their screen. The guard redirects a
//! signed-out user to `/login`, which fails the command before any request is
//! made. Calls then run inside the screen's [`ViewScope`], so abandoning the
//! command aborts them.

use std::future::Future;

use anyhow::{Result, bail};
use api::HotelApi;
use api::models::{BookingRequest, Feedback, FeedbackSearch, GuestRequest, RoomRequest};
use auth::models::StaffRequest;
use common::{ApiResult, KeyValueStore};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::cli::{
    BookingsAction, Command, FeedbacksAction, GuestsAction, RoomsAction, StaffAction,
};
use crate::routes::Route;
use crate::scope::ViewScope;
use crate::shell::{Shell, View};

/// Hint shown when a command needs a session
pub const SIGN_IN_HINT: &str = "Not signed in. Run `hotel-console login` first.";

/// What a command prints on stdout
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Json(serde_json::Value),
    Text(String),
}

impl Output {
    fn json<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Output::Json(serde_json::to_value(value)?))
    }

    /// Text printed for this output
    pub fn render(&self) -> Result<String> {
        match self {
            Output::Json(value) => Ok(serde_json::to_string_pretty(value)?),
            Output::Text(text) => Ok(text.clone()),
        }
    }
}

/// Execute one command against the shell and resource clients
pub async fn execute<S: KeyValueStore>(
    command: Command,
    shell: &mut Shell<S>,
    api: &HotelApi,
) -> Result<Output> {
    match command {
        Command::Login(credentials) => {
            shell
                .login(&credentials.username, &credentials.password)
                .await?;
            signed_in(shell)
        }
        Command::Register(credentials) => {
            shell
                .register(&credentials.username, &credentials.password)
                .await?;
            signed_in(shell)
        }
        Command::Logout => {
            shell.logout()?;
            Ok(Output::Text("Signed out".to_string()))
        }
        Command::Status => Output::json(&json!({
            "authenticated": shell.state().is_authenticated(),
            "user": shell.state().user(),
            "location": shell.location(),
        })),
        Command::Menu => {
            if !shell.state().is_authenticated() {
                bail!(SIGN_IN_HINT);
            }
            Output::json(&shell.menu())
        }
        Command::Open { path } => Output::json(shell.navigate(&path)),
        Command::Rooms { action } => rooms(action, shell, api).await,
        Command::Guests { action } => guests(action, shell, api).await,
        Command::Bookings { action } => bookings(action, shell, api).await,
        Command::Feedbacks { action } => feedbacks(action, shell, api).await,
        Command::Staff { action } => staff(action, shell).await,
    }
}

fn signed_in<S: KeyValueStore>(shell: &Shell<S>) -> Result<Output> {
    match shell.state().user() {
        Some(user) => Ok(Output::Text(format!(
            "Signed in as {} ({})",
            user.username, user.role
        ))),
        None => bail!(SIGN_IN_HINT),
    }
}

/// Open `route`, failing when the guard sends the user elsewhere
fn enter<S: KeyValueStore>(shell: &mut Shell<S>, route: Route) -> Result<ViewScope> {
    match shell.navigate(route.path()) {
        View::Page(shown) if *shown == route => Ok(ViewScope::new(route.path())),
        View::Page(Route::Login) => bail!(SIGN_IN_HINT),
        other => bail!("Cannot open {}: {:?}", route, other),
    }
}

/// Run one call in `scope` and wait for it
async fn call<T, F>(scope: &mut ViewScope, request: F) -> Result<T>
where
    F: Future<Output = ApiResult<T>> + Send + 'static,
    T: Send + 'static,
{
    Ok(scope.spawn(request).await??)
}

fn text(message: String) -> Result<Output> {
    Ok(Output::Text(message))
}

async fn rooms<S: KeyValueStore>(
    action: RoomsAction,
    shell: &mut Shell<S>,
    api: &HotelApi,
) -> Result<Output> {
    let mut scope = enter(shell, Route::Rooms)?;
    let rooms = api.rooms.clone();

    match action {
        RoomsAction::List(page) => {
            Output::json(&call(&mut scope, async move { rooms.get_page(page.into()).await }).await?)
        }
        RoomsAction::Available(page) => Output::json(
            &call(&mut scope, async move { rooms.get_available(page.into()).await }).await?,
        ),
        RoomsAction::Get { id } => {
            Output::json(&call(&mut scope, async move { rooms.get_by_id(id).await }).await?)
        }
        RoomsAction::Create(args) => {
            let request = RoomRequest::from(args);
            Output::json(&call(&mut scope, async move { rooms.create(&request).await }).await?)
        }
        RoomsAction::Update { id, room } => {
            let request = RoomRequest::from(room);
            Output::json(&call(&mut scope, async move { rooms.update(id, &request).await }).await?)
        }
        RoomsAction::Delete { id } => {
            text(call(&mut scope, async move { rooms.delete(id).await }).await?)
        }
    }
}

async fn guests<S: KeyValueStore>(
    action: GuestsAction,
    shell: &mut Shell<S>,
    api: &HotelApi,
) -> Result<Output> {
    let mut scope = enter(shell, Route::Guests)?;
    let guests = api.guests.clone();

    match action {
        GuestsAction::List(page) => {
            Output::json(&call(&mut scope, async move { guests.get_page(page.into()).await }).await?)
        }
        GuestsAction::Get { id } => {
            Output::json(&call(&mut scope, async move { guests.get_by_id(id).await }).await?)
        }
        GuestsAction::Phone { phone } => Output::json(
            &call(&mut scope, async move { guests.get_by_phone(&phone).await }).await?,
        ),
        GuestsAction::Create(args) => {
            let request = GuestRequest::from(args);
            Output::json(&call(&mut scope, async move { guests.create(&request).await }).await?)
        }
        GuestsAction::Update { id, guest } => {
            let request = GuestRequest::from(guest);
            Output::json(&call(&mut scope, async move { guests.update(id, &request).await }).await?)
        }
        GuestsAction::Delete { id } => {
            text(call(&mut scope, async move { guests.delete(id).await }).await?)
        }
    }
}

async fn bookings<S: KeyValueStore>(
    action: BookingsAction,
    shell: &mut Shell<S>,
    api: &HotelApi,
) -> Result<Output> {
    let mut scope = enter(shell, Route::Bookings)?;
    let bookings = api.bookings.clone();

    match action {
        BookingsAction::List(page) => Output::json(
            &call(&mut scope, async move { bookings.get_page(page.into()).await }).await?,
        ),
        BookingsAction::Get { id } => {
            Output::json(&call(&mut scope, async move { bookings.get_by_id(id).await }).await?)
        }
        BookingsAction::ForGuest { guest_id, page } => Output::json(
            &call(&mut scope, async move {
                bookings.get_by_guest(guest_id, page.into()).await
            })
            .await?,
        ),
        BookingsAction::Create(args) => {
            let request = BookingRequest::from(args);
            Output::json(&call(&mut scope, async move { bookings.create(&request).await }).await?)
        }
        BookingsAction::Update { id, booking } => {
            let request = BookingRequest::from(booking);
            Output::json(
                &call(&mut scope, async move { bookings.update(id, &request).await }).await?,
            )
        }
        BookingsAction::Delete { id } => {
            text(call(&mut scope, async move { bookings.delete(id).await }).await?)
        }
        BookingsAction::CheckIn { id } => {
            text(call(&mut scope, async move { bookings.check_in(id).await }).await?)
        }
        BookingsAction::CheckOut { id } => {
            text(call(&mut scope, async move { bookings.check_out(id).await }).await?)
        }
        BookingsAction::Cancel { id } => {
            text(call(&mut scope, async move { bookings.cancel(id).await }).await?)
        }
    }
}

async fn feedbacks<S: KeyValueStore>(
    action: FeedbacksAction,
    shell: &mut Shell<S>,
    api: &HotelApi,
) -> Result<Output> {
    // Health is not a screen, so it skips the guard
    let mut scope = match action {
        FeedbacksAction::Health => ViewScope::new("feedback health"),
        _ => enter(shell, Route::Feedbacks)?,
    };
    let feedbacks = api.feedbacks.clone();

    match action {
        FeedbacksAction::List(page) => Output::json(
            &call(&mut scope, async move { feedbacks.get_page(page.into()).await }).await?,
        ),
        FeedbacksAction::Get { id } => {
            Output::json(&call(&mut scope, async move { feedbacks.get_by_id(id).await }).await?)
        }
        FeedbacksAction::Search(args) => {
            let filters = FeedbackSearch::from(args);
            Output::json(&call(&mut scope, async move { feedbacks.search(&filters).await }).await?)
        }
        FeedbacksAction::Submit(args) => {
            let feedback = Feedback::from(args);
            Output::json(
                &call(&mut scope, async move { feedbacks.submit(&feedback).await }).await?,
            )
        }
        FeedbacksAction::Update { id, feedback } => {
            let feedback = Feedback::from(feedback);
            Output::json(
                &call(&mut scope, async move { feedbacks.update(id, &feedback).await }).await?,
            )
        }
        FeedbacksAction::Delete { id } => {
            Output::json(&call(&mut scope, async move { feedbacks.delete(id).await }).await?)
        }
        FeedbacksAction::Health => {
            Output::json(&call(&mut scope, async move { feedbacks.health().await }).await?)
        }
    }
}

async fn staff<S: KeyValueStore>(action: StaffAction, shell: &mut Shell<S>) -> Result<Output> {
    let mut scope = enter(shell, Route::Staff)?;
    let staff = shell.gate().api().clone();

    match action {
        StaffAction::List => {
            Output::json(&call(&mut scope, async move { staff.get_all_staff().await }).await?)
        }
        StaffAction::Create(args) => {
            let request = StaffRequest::from(args);
            info!("Creating staff account {}", request.username);
            text(call(&mut scope, async move { staff.create_staff(&request).await }).await?)
        }
        StaffAction::Update { id, staff: args } => {
            let request = StaffRequest::from(args);
            text(call(&mut scope, async move { staff.update_staff(id, &request).await }).await?)
        }
        StaffAction::Delete { id } => {
            text(call(&mut scope, async move { staff.delete_staff(id).await }).await?)
        }
    }
}
