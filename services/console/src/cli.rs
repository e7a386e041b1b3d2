//! Command-line interface definition

use std::path::PathBuf;

use api::models::{BookingRequest, Feedback, FeedbackSearch, GuestRequest, RoomRequest, RoomType};
use auth::Role;
use auth::models::StaffRequest;
use clap::{Args, Parser, Subcommand};
use common::PageRequest;

#[derive(Parser, Debug)]
#[command(name = "hotel-console")]
#[command(author, version, about = "Hotel management console")]
pub struct Cli {
    /// API base address (overrides HOTEL_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Session file (overrides HOTEL_SESSION_PATH)
    #[arg(long, global = true)]
    pub session_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in
    Login(Credentials),
    /// Create an account and sign in
    Register(Credentials),
    /// Sign out of this machine
    Logout,
    /// Show who is signed in
    Status,
    /// Show the navigation menu for the signed-in role
    Menu,
    /// Resolve a path through the route guard
    Open {
        /// Path such as /rooms
        path: String,
    },
    /// Manage rooms
    Rooms {
        #[command(subcommand)]
        action: RoomsAction,
    },
    /// Manage guests
    Guests {
        #[command(subcommand)]
        action: GuestsAction,
    },
    /// Manage bookings
    Bookings {
        #[command(subcommand)]
        action: BookingsAction,
    },
    /// Manage guest feedback
    Feedbacks {
        #[command(subcommand)]
        action: FeedbacksAction,
    },
    /// Manage staff accounts
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },
}

#[derive(Args, Debug)]
pub struct Credentials {
    #[arg(short, long)]
    pub username: String,
    /// Read from HOTEL_PASSWORD when omitted, keeping it out of argv
    #[arg(short, long, env = "HOTEL_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Pagination flags shared by list commands
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Zero-based page number
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    /// Items per page
    #[arg(long, default_value_t = 10)]
    pub size: u32,
}

impl From<PageArgs> for PageRequest {
    fn from(args: PageArgs) -> Self {
        PageRequest::new(args.page, args.size)
    }
}

#[derive(Subcommand, Debug)]
pub enum RoomsAction {
    /// List rooms
    List(PageArgs),
    /// List available rooms
    Available(PageArgs),
    /// Show one room
    Get { id: i64 },
    /// Create a room
    Create(RoomArgs),
    /// Replace a room
    Update {
        id: i64,
        #[command(flatten)]
        room: RoomArgs,
    },
    /// Delete a room
    Delete { id: i64 },
}

#[derive(Args, Debug)]
pub struct RoomArgs {
    #[arg(long)]
    pub number: String,
    /// SINGLE, DOUBLE, SUITE or DELUXE
    #[arg(long = "type")]
    pub room_type: RoomType,
    #[arg(long)]
    pub price: f64,
}

impl From<RoomArgs> for RoomRequest {
    fn from(args: RoomArgs) -> Self {
        RoomRequest {
            room_number: args.number,
            room_type: args.room_type,
            price: args.price,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum GuestsAction {
    /// List guests
    List(PageArgs),
    /// Show one guest
    Get { id: i64 },
    /// Find a guest by phone number
    Phone { phone: String },
    /// Register a guest
    Create(GuestArgs),
    /// Replace a guest
    Update {
        id: i64,
        #[command(flatten)]
        guest: GuestArgs,
    },
    /// Delete a guest
    Delete { id: i64 },
}

#[derive(Args, Debug)]
pub struct GuestArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub id_proof: String,
    #[arg(long)]
    pub address: String,
}

impl From<GuestArgs> for GuestRequest {
    fn from(args: GuestArgs) -> Self {
        GuestRequest {
            name: args.name,
            email: args.email,
            phone_number: args.phone,
            id_proof_number: args.id_proof,
            address: args.address,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum BookingsAction {
    /// List bookings
    List(PageArgs),
    /// Show one booking
    Get { id: i64 },
    /// List a guest's bookings
    ForGuest {
        guest_id: i64,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Reserve a room
    Create(BookingArgs),
    /// Replace a booking
    Update {
        id: i64,
        #[command(flatten)]
        booking: BookingArgs,
    },
    /// Delete a booking
    Delete { id: i64 },
    /// Mark a booking as checked in
    CheckIn { id: i64 },
    /// Mark a booking as checked out
    CheckOut { id: i64 },
    /// Cancel a booking
    Cancel { id: i64 },
}

#[derive(Args, Debug)]
pub struct BookingArgs {
    #[arg(long)]
    pub guest_id: i64,
    #[arg(long)]
    pub room_id: i64,
    /// Check-in date, YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub check_in: String,
    /// Check-out date, YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub check_out: String,
    #[arg(long)]
    pub adults: u32,
    #[arg(long)]
    pub children: Option<u32>,
}

impl From<BookingArgs> for BookingRequest {
    fn from(args: BookingArgs) -> Self {
        BookingRequest {
            guest_id: args.guest_id,
            room_id: args.room_id,
            check_in_date: args.check_in,
            check_out_date: args.check_out,
            number_of_adults: args.adults,
            number_of_children: args.children,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum FeedbacksAction {
    /// List feedback
    List(PageArgs),
    /// Show one feedback entry
    Get { id: i64 },
    /// Search feedback
    Search(SearchArgs),
    /// Submit feedback for a guest
    Submit(FeedbackArgs),
    /// Replace a feedback entry
    Update {
        id: i64,
        #[command(flatten)]
        feedback: FeedbackArgs,
    },
    /// Delete a feedback entry
    Delete { id: i64 },
    /// Check the feedback service
    Health,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Guest name
    #[arg(long)]
    pub name: Option<String>,
    /// Feedback ID
    #[arg(long)]
    pub id: Option<i64>,
    #[arg(long)]
    pub room_number: Option<String>,
    #[arg(long)]
    pub min_rating: Option<u8>,
    #[arg(long)]
    pub max_rating: Option<u8>,
}

impl From<SearchArgs> for FeedbackSearch {
    fn from(args: SearchArgs) -> Self {
        FeedbackSearch {
            name: args.name,
            id: args.id,
            room_number: args.room_number,
            min_rating: args.min_rating,
            max_rating: args.max_rating,
        }
    }
}

#[derive(Args, Debug)]
pub struct FeedbackArgs {
    #[arg(long)]
    pub guest_name: String,
    #[arg(long)]
    pub guest_email: String,
    #[arg(long)]
    pub room_number: Option<String>,
    #[arg(long)]
    pub rating: u8,
    #[arg(long)]
    pub service_quality: String,
    #[arg(long)]
    pub room_cleanliness: String,
    #[arg(long)]
    pub amenities: String,
    #[arg(long)]
    pub overall: String,
    #[arg(long)]
    pub suggestions: Option<String>,
}

impl From<FeedbackArgs> for Feedback {
    fn from(args: FeedbackArgs) -> Self {
        Feedback {
            feedback_id: None,
            guest_name: args.guest_name,
            guest_email: args.guest_email,
            room_number: args.room_number,
            rating: args.rating,
            service_quality: args.service_quality,
            room_cleanliness: args.room_cleanliness,
            amenities_feedback: args.amenities,
            overall_experience: args.overall,
            suggestions: args.suggestions,
            created_at: None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum StaffAction {
    /// List staff accounts
    List,
    /// Create a staff account
    Create(StaffArgs),
    /// Update a staff account; omit --password to keep it
    Update {
        id: i64,
        #[command(flatten)]
        staff: StaffArgs,
    },
    /// Delete a staff account
    Delete { id: i64 },
}

#[derive(Args, Debug)]
pub struct StaffArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    /// ROLE_USER, ROLE_RECEPTIONIST or ROLE_MANAGER
    #[arg(long)]
    pub role: Role,
}

impl From<StaffArgs> for StaffRequest {
    fn from(args: StaffArgs) -> Self {
        StaffRequest {
            username: args.username,
            password: args.password,
            email: args.email,
            first_name: args.first_name,
            last_name: args.last_name,
            role: args.role,
        }
    }
}
