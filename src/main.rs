//! Command-line host for the doctor appointment screen.
//!
//! Loads an appointment snapshot, then lets the user pick dates, toggle
//! between the filtered and full list, and open appointment details.

use chrono::{Local, NaiveDate};
use clap::Parser;
use hms_doctor::config::ScreenConfig;
use hms_doctor::loader::{load_appointments, sample_appointments};
use hms_doctor::{Appointment, AppointmentNavigator, AppointmentScreen, ScreenAction, ScreenModel};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hms-doctor", about = "Browse a doctor's appointments by day")]
struct Args {
    /// JSON file with the appointment snapshot; sample data when omitted.
    #[arg(long)]
    appointments: Option<PathBuf>,

    /// TOML screen config; falls back to $HMS_DOCTOR_CONFIG.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial date (YYYY-MM-DD), defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
}

/// Prints appointment details in place of a detail screen.
struct ConsoleNavigator;

impl AppointmentNavigator for ConsoleNavigator {
    fn open_appointment(&mut self, appointment: &Appointment) {
        println!("\n--- Appointment Details ---");
        println!("  Patient: {}", appointment.patient_name());
        println!("  Type:    {}", appointment.appointment_type());
        println!(
            "  When:    {}",
            appointment.start_date().format("%A, %B %-d, %Y at %-I:%M %p")
        );
        println!("  Status:  {}", appointment.status());
        println!("  ID:      {}", appointment.id());
    }
}

struct AppointmentCLI {
    screen: AppointmentScreen,
    navigator: ConsoleNavigator,
    running: bool,
}

impl AppointmentCLI {
    fn new(screen: AppointmentScreen) -> Self {
        AppointmentCLI {
            screen,
            navigator: ConsoleNavigator,
            running: true,
        }
    }

    fn print_header(&self) {
        println!("\n{}", "=".repeat(60));
        println!("       DOCTOR APPOINTMENTS");
        println!("{}", "=".repeat(60));
    }

    fn print_menu(&self, model: &ScreenModel) {
        println!("\n--- Menu ---");
        println!("1. Select date");
        println!("2. {}", model.toggle_label);
        println!("3. Go to today");
        println!("4. Open appointment");
        println!("5. Exit");
        println!("{}", "-".repeat(20));
    }

    fn get_input(&self, prompt: &str) -> Option<String> {
        print!("{}: ", prompt);
        io::stdout().flush().ok()?;

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(input.trim().to_string()),
        }
    }

    fn render(&self, model: &ScreenModel) {
        println!(
            "\n{} ({})",
            model.title,
            model.state.selected_date.format("%B %-d, %Y")
        );

        if let Some(empty) = &model.empty_state {
            println!("\n  {}", empty.title);
            println!("  {}", empty.message);
            if model.show_go_to_today {
                println!("  [Go to Today: option 3]");
            }
            return;
        }

        for (i, row) in model.rows.iter().enumerate() {
            println!(
                "  {}. {:8} {:15} {:18} [{} / {}]",
                i + 1,
                row.time,
                row.patient_name,
                row.appointment_type,
                row.status,
                row.status_color.name()
            );
        }
    }

    fn apply(&mut self, action: ScreenAction) {
        if let Err(e) = self.screen.handle(action, &mut self.navigator) {
            println!("\n{}", e);
        }
    }

    fn select_date(&mut self) {
        let Some(raw) = self.get_input("Date (YYYY-MM-DD)") else {
            self.running = false;
            return;
        };
        match raw.parse::<NaiveDate>() {
            Ok(date) => self.apply(ScreenAction::SelectDate(date)),
            Err(_) => println!("Please enter a date like 2025-04-05"),
        }
    }

    fn open_appointment(&mut self, model: &ScreenModel) {
        if model.rows.is_empty() {
            println!("\nNo appointments to open");
            return;
        }
        let Some(raw) = self.get_input("Row number") else {
            self.running = false;
            return;
        };
        match raw.parse::<usize>() {
            Ok(n) if n >= 1 && n <= model.rows.len() => {
                let id = model.rows[n - 1].id.clone();
                self.apply(ScreenAction::OpenAppointment(id));
            }
            _ => println!("Please enter a row between 1 and {}", model.rows.len()),
        }
    }

    fn run(&mut self) {
        self.print_header();

        while self.running {
            let model = self.screen.model();
            self.render(&model);
            self.print_menu(&model);

            let Some(choice) = self.get_input("Enter choice") else {
                break;
            };

            match choice.as_str() {
                "1" => self.select_date(),
                "2" => self.apply(ScreenAction::ToggleMode),
                "3" => self.apply(ScreenAction::GoToToday(Local::now().date_naive())),
                "4" => self.open_appointment(&model),
                "5" => {
                    self.running = false;
                    println!("\nGoodbye!");
                }
                _ => println!("Invalid choice"),
            }
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let today = args.date.unwrap_or_else(|| Local::now().date_naive());

    let config = match ScreenConfig::resolve(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };

    let appointments = match &args.appointments {
        Some(path) => match load_appointments(path) {
            Ok(appointments) => appointments,
            Err(e) => {
                error!(error = %e, "appointment load failed");
                return ExitCode::FAILURE;
            }
        },
        None => sample_appointments(today),
    };

    let mut cli = AppointmentCLI::new(AppointmentScreen::new(appointments, today, config));
    cli.run();
    ExitCode::SUCCESS
}
