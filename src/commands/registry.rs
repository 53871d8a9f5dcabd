use crate::modules::{
    favorites::commands::{add_favorite_movie, get_favorite_movies},
    movie::{
        commands::{list_popular_movies, search_movies},
        Movie,
    },
    movie_detail::{
        commands::{get_share_link, open_movie_detail},
        DetailView, StoryPanel,
    },
};
use crate::shared::{errors::AppResult, SessionScope};
use clap::{Parser, Subcommand};

/// Command line front end over the session commands
#[derive(Debug, Parser)]
#[command(name = "cinestory", version, about = "Browse movies and read their generated stories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List currently popular movies
    Popular,
    /// Search movies by title
    Search { query: String },
    /// Show a movie's detail page and wait for its story
    Show {
        id: String,
        /// Add the movie to this session's favorites
        #[arg(long)]
        favorite: bool,
        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the share link for a movie
    Share { id: String },
}

/// Single entry point from a parsed command to the module commands
pub async fn dispatch(scope: &SessionScope, command: Command) -> AppResult<()> {
    match command {
        Command::Popular => print_movies(&list_popular_movies(scope).await?),
        Command::Search { query } => print_movies(&search_movies(scope, &query).await?),
        Command::Share { id } => println!("{}", get_share_link(scope, &id)?),
        Command::Show { id, favorite, json } => {
            let mut page = open_movie_detail(scope, &id).await?;

            if favorite {
                if let Some(movie) = page.movie() {
                    add_favorite_movie(scope, movie.display_title())?;
                }
            }

            page.wait_for_story().await?;
            page.open_share();
            let view = page.view();

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_detail(&view);
                let favorites = get_favorite_movies(scope)?;
                if !favorites.is_empty() {
                    println!("\nFavorites: {}", favorites.join(", "));
                }
            }
        }
    }
    Ok(())
}

fn print_movies(movies: &[Movie]) {
    for movie in movies {
        let year = movie
            .released_on()
            .map(|d| d.format("%Y").to_string())
            .unwrap_or_else(|| "----".to_string());
        println!("{:>8}  {}  {}", movie.id, year, movie.display_title());
    }
}

fn print_detail(view: &DetailView) {
    let DetailView::Loaded(detail) = view else {
        println!("(loading)");
        return;
    };

    println!("{}", detail.title);
    if let Some(collection) = &detail.collection_name {
        println!("{}", collection);
    }
    if let Some(budget) = detail.budget {
        println!("Budget: $ {}", budget);
    }
    if let Some(date) = detail.release_date {
        println!("{}", date.format("%B %-d, %Y"));
    }
    println!("\n{}", detail.overview);
    if !detail.genres.is_empty() {
        println!("\nGenres: {}", detail.genres.join(", "));
    }
    if !detail.production_companies.is_empty() {
        println!("Production companies: {}", detail.production_companies.join(", "));
    }

    match &detail.story {
        StoryPanel::Text(story) => println!("\n{}", story),
        StoryPanel::Loading => println!("\n(story still loading)"),
        StoryPanel::Unavailable(reason) => println!("\n(story unavailable: {})", reason),
    }

    if let Some(link) = detail.share.link() {
        println!("\nShare: {}", link);
    }

    if !detail.similar.is_empty() {
        println!("\nSimilar movies:");
        for card in &detail.similar {
            println!("  {:>8}  {}", card.id, card.title);
        }
    }
}
