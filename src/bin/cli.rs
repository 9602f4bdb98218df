use clap::{Parser, Subcommand};
use college_en_ligne::cli::create_principal;
use college_en_ligne::cli::seeder::{clear_seeded_data, seed_demo_data, seed_reference_data};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "college-cli")]
#[command(about = "Collège en ligne CLI - Administrative tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a Principal account (the bootstrap super-admin)
    CreatePrincipal {
        /// First name of the principal
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name of the principal
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the reference classes and languages, plus demo accounts
    Seed {
        /// Number of demo teachers to create
        #[arg(long, default_value = "5")]
        teachers: usize,

        /// Number of demo collegians per class
        #[arg(long, default_value = "10")]
        collegians: usize,

        /// Only seed the reference data, no demo accounts
        #[arg(long)]
        reference_only: bool,
    },
    /// Clear the seeded demo accounts (keeps reference data)
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    match cli.command {
        Commands::CreatePrincipal {
            first_name,
            last_name,
            email,
            password,
        } => {
            let first_name = first_name.unwrap_or_else(|| {
                Input::new()
                    .with_prompt("First name")
                    .interact_text()
                    .expect("Failed to read first name")
            });
            let last_name = last_name.unwrap_or_else(|| {
                Input::new()
                    .with_prompt("Last name")
                    .interact_text()
                    .expect("Failed to read last name")
            });
            let email = email.unwrap_or_else(|| {
                Input::new()
                    .with_prompt("Email")
                    .interact_text()
                    .expect("Failed to read email")
            });
            let password = password.unwrap_or_else(|| {
                Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .expect("Failed to read password")
            });

            match create_principal(&pool, &first_name, &last_name, &email, &password).await {
                Ok(()) => {
                    println!("✅ Principal account created!");
                    println!("   Email: {}", email);
                    println!("   Name: {} {}", first_name, last_name);
                }
                Err(e) => {
                    eprintln!("❌ Error creating principal: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Seed {
            teachers,
            collegians,
            reference_only,
        } => {
            let result = if reference_only {
                seed_reference_data(&pool).await
            } else {
                seed_demo_data(&pool, teachers, collegians).await
            };

            if let Err(e) = result {
                eprintln!("❌ Seeding failed: {}", e);
                std::process::exit(1);
            }
        }
        Commands::ClearSeed => {
            if let Err(e) = clear_seeded_data(&pool).await {
                eprintln!("❌ Clearing seeded data failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}
