use utoipa::OpenApi;
use crate::common::response::MessageResponse;
use crate::modules::genre::model::Genre;
use crate::modules::language::model::Language;
use crate::modules::movie::dto::{CreateMovieRequest, UpdateMovieRequest};
use crate::modules::movie::model::{Movie, MovieDetails};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::movie::handler::list_movies,
        crate::modules::movie::handler::create_movie,
        crate::modules::movie::handler::get_movie,
        crate::modules::movie::handler::update_movie,
        crate::modules::movie::handler::delete_movie,
        crate::modules::movie::handler::list_movies_by_genre,
        crate::modules::genre::handler::list_genres,
        crate::modules::language::handler::list_languages,
    ),
    components(
        schemas(
            Movie, MovieDetails, Genre, Language,
            CreateMovieRequest, UpdateMovieRequest,
            MessageResponse,
        )
    ),
    tags(
        (name = "Movies", description = "Movie catalog"),
        (name = "Catalog", description = "Reference genres and languages")
    )
)]
pub struct ApiDoc;
