use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use quiet_wealth::api::PropertyFilter;
use quiet_wealth::format;
use quiet_wealth::forms::PropertyForm;
use quiet_wealth::models::{Inquiry, Property, PropertyType};
use quiet_wealth::notify::{Toast, ToastLevel};
use quiet_wealth::views::{CatalogState, Confirm, DetailState, Outcome, Tab};
use quiet_wealth::{logging, App, Config};
use std::io::{self, Write};
use tracing::info;

#[derive(Parser)]
#[command(name = "quiet-wealth")]
#[command(about = "Browse and manage Quiet Wealth property listings")]
#[command(version)]
struct Cli {
    /// Backend base URL (overrides ESTATE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List properties, optionally filtered
    Properties {
        #[arg(long = "type")]
        property_type: Option<PropertyType>,
        #[arg(long)]
        min_price: Option<u64>,
        #[arg(long)]
        max_price: Option<u64>,
        /// Minimum bedrooms
        #[arg(long)]
        bedrooms: Option<u32>,
        /// Only featured listings
        #[arg(long)]
        featured: bool,
        #[arg(long)]
        location: Option<String>,
    },
    /// Show the home page selection of featured listings
    Featured,
    /// Show one property
    Show {
        id: String,
        /// Gallery position; wraps past the last image
        #[arg(long, default_value_t = 0)]
        image: usize,
    },
    /// Send an inquiry, optionally about a property
    Inquire {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        message: String,
        #[arg(long)]
        property_id: Option<String>,
    },
    /// Manage listings and inquiries
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// List all properties
    List,
    /// List all inquiries, newest first
    Inquiries,
    /// Populate demonstration listings
    Seed,
    /// Create a property
    Add(PropertyFields),
    /// Edit a property; omitted fields keep their current value
    Edit {
        id: String,
        #[command(flatten)]
        fields: PropertyFields,
    },
    /// Delete a property
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Delete an inquiry
    DeleteInquiry {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args)]
struct PropertyFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long = "type")]
    property_type: Option<PropertyType>,
    #[arg(long)]
    bedrooms: Option<String>,
    #[arg(long)]
    bathrooms: Option<String>,
    #[arg(long)]
    area: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Comma separated, e.g. "Pool, Wine Cellar"
    #[arg(long)]
    features: Option<String>,
    /// Image URL; repeat for more, first is the cover
    #[arg(long = "image")]
    images: Vec<String>,
    #[arg(long)]
    featured: Option<bool>,
}

impl PropertyFields {
    fn apply(self, form: &mut PropertyForm) {
        let text = |field: &mut String, value: Option<String>| {
            if let Some(v) = value {
                *field = v;
            }
        };
        text(&mut form.title, self.title);
        text(&mut form.location, self.location);
        text(&mut form.price, self.price);
        text(&mut form.bedrooms, self.bedrooms);
        text(&mut form.bathrooms, self.bathrooms);
        text(&mut form.area, self.area);
        text(&mut form.description, self.description);
        text(&mut form.features, self.features);
        if !self.images.is_empty() {
            form.images = self.images.join("\n");
        }
        if let Some(t) = self.property_type {
            form.property_type = t;
        }
        if let Some(f) = self.featured {
            form.featured = f;
        }
    }
}

/// Prompts on stdin, anything but y/yes declines
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(|_: &str| true)
    } else {
        Box::new(StdinConfirm)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let config = Config::from_env().with_api_url(cli.api_url);
    let app = App::init(&config).context("Failed to create HTTP client")?;

    let result = run(&app, cli.command).await;

    for toast in app.shutdown() {
        print_toast(&toast);
    }
    result
}

async fn run(app: &App, command: Commands) -> Result<()> {
    match command {
        Commands::Properties {
            property_type,
            min_price,
            max_price,
            bedrooms,
            featured,
            location,
        } => {
            let filter = PropertyFilter {
                property_type,
                min_price,
                max_price,
                bedrooms,
                featured: featured.then_some(true),
                location,
            };
            let mut catalog = app.catalog();
            catalog.apply_filter(filter).await;

            match catalog.state() {
                CatalogState::Listing(properties) => {
                    info!("Showing {} properties", properties.len());
                    for (i, property) in properties.iter().enumerate() {
                        print_card(i + 1, property);
                    }
                }
                _ if catalog.has_active_filters() => {
                    println!("No properties match your criteria. Try clearing the filters.");
                }
                _ => println!("No properties available."),
            }
        }

        Commands::Featured => {
            let mut home = app.home();
            home.load().await;
            if home.featured().is_empty() {
                println!("No featured properties yet.");
            }
            for (i, property) in home.featured().iter().enumerate() {
                print_card(i + 1, property);
            }
        }

        Commands::Show { id, image } => {
            let mut detail = app.property(&id);
            detail.load().await;

            if let Some(gallery) = detail.gallery_mut() {
                if !gallery.is_empty() {
                    let len = gallery.len();
                    gallery.select(image % len);
                }
            }

            match detail.state() {
                DetailState::Loaded { property, gallery } => {
                    print_detail(property);
                    if let Some(url) = detail.current_image() {
                        println!("   Image {}/{}: {}", gallery.index() + 1, gallery.len(), url);
                    }
                }
                _ => {
                    println!("Property Not Found");
                    println!("Return to the catalog with `quiet-wealth properties`.");
                }
            }
        }

        Commands::Inquire {
            name,
            email,
            phone,
            message,
            property_id,
        } => {
            let mut view = match property_id {
                Some(id) => {
                    let mut detail = app.property(&id);
                    detail.load().await;
                    match detail.inquiry_form() {
                        Some(view) => view,
                        None => bail!("Property {} not found", id),
                    }
                }
                None => app.contact(),
            };

            view.form.name = name;
            view.form.email = email;
            view.form.phone = phone.unwrap_or_default();
            view.form.message = message;

            match view.submit().await {
                Outcome::Done(inquiry) => info!("Inquiry {} recorded", inquiry.id),
                Outcome::Rejected(e) => bail!("Inquiry not sent: {}", e),
                Outcome::Failed(e) => return Err(e).context("Failed to submit inquiry"),
                Outcome::Cancelled => {}
            }
        }

        Commands::Admin { action } => run_admin(app, action).await?,
    }

    Ok(())
}

async fn run_admin(app: &App, action: AdminAction) -> Result<()> {
    let mut panel = app.admin();
    if let Outcome::Failed(e) = panel.load().await {
        return Err(e).context("Failed to load admin data");
    }

    let outcome = match action {
        AdminAction::List => {
            println!("{}", panel.tab_label(Tab::Properties));
            if panel.properties().is_empty() {
                println!("No properties yet. Run `quiet-wealth admin seed` or `quiet-wealth admin add` to get started.");
            }
            for (i, property) in panel.properties().iter().enumerate() {
                print_card(i + 1, property);
            }
            return Ok(());
        }
        AdminAction::Inquiries => {
            panel.switch_tab(Tab::Inquiries);
            println!("{}", panel.tab_label(panel.tab()));
            if panel.inquiries().is_empty() {
                println!("No inquiries yet.");
            }
            for inquiry in panel.inquiries() {
                print_inquiry(inquiry);
            }
            return Ok(());
        }
        AdminAction::Seed => panel.seed().await.map(|_| ()),
        AdminAction::Add(fields) => {
            panel.open_create();
            fields.apply(&mut panel.form);
            panel.submit().await
        }
        AdminAction::Edit { id, fields } => {
            if !panel.open_edit_by_id(&id) {
                bail!("Property {} not found", id);
            }
            fields.apply(&mut panel.form);
            panel.submit().await
        }
        AdminAction::Delete { id, yes } => panel.delete_property(&id, &*confirmer(yes)).await,
        AdminAction::DeleteInquiry { id, yes } => {
            panel.delete_inquiry(&id, &*confirmer(yes)).await
        }
    };

    match outcome {
        Outcome::Done(()) => {
            info!("{}", panel.tab_label(Tab::Properties));
            Ok(())
        }
        Outcome::Cancelled => {
            println!("Cancelled.");
            Ok(())
        }
        Outcome::Rejected(e) => bail!("Form rejected: {}", e),
        Outcome::Failed(e) => Err(e).context("Admin action failed"),
    }
}

fn print_card(n: usize, property: &Property) {
    let badge = if property.featured { " [Featured]" } else { "" };
    println!("{}. {}{} ({})", n, property.title, badge, format::price(property.price));
    println!("   {} · {}", property.location, property.property_type);
    println!(
        "   {} BD · {} BA · {} SF",
        property.bedrooms,
        property.bathrooms,
        format::thousands(u64::from(property.area))
    );
    println!("   ID: {}", property.id);
    println!();
}

fn print_detail(property: &Property) {
    println!("{}", property.title);
    println!("   {}", property.location);
    println!("   {}", format::price(property.price));
    if let Some(per_sqft) = format::price_per_sqft(property.price, property.area) {
        println!("   {} per sq ft", format::price(per_sqft));
    }
    println!(
        "   {} bedrooms · {} bathrooms · {} sq ft",
        property.bedrooms,
        property.bathrooms,
        format::thousands(u64::from(property.area))
    );
    println!();
    println!("{}", property.description);
    if !property.features.is_empty() {
        println!();
        println!("Features: {}", property.features.join(", "));
    }
}

fn print_inquiry(inquiry: &Inquiry) {
    println!("{} ({})", inquiry.name, format::timestamp(&inquiry.created_at));
    println!("   {}", inquiry.email);
    if let Some(phone) = &inquiry.phone {
        println!("   {}", phone);
    }
    if let Some(title) = &inquiry.property_title {
        println!("   Property: {}", title);
    }
    println!("   {}", inquiry.message);
    println!("   ID: {}", inquiry.id);
    println!();
}

fn print_toast(toast: &Toast) {
    match toast.level {
        ToastLevel::Success => println!("✓ {}", toast.message),
        ToastLevel::Error => println!("✗ {}", toast.message),
    }
}
