use actix_web::dev::Server;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;
use std::net::TcpListener;

use crate::configuration::JwtSettings;
use crate::logger::RequestLogger;
use crate::middleware::DeserializeToken;
use crate::routes::{
    create_product, delete_product, get_product, get_products, health_check, login, refresh,
    register, session, update_product,
};

pub fn run(
    listener: TcpListener,
    connection: PgPool,
    jwt_config: JwtSettings,
) -> Result<Server, std::io::Error> {
    let connection = web::Data::new(connection);
    let jwt_config_data = web::Data::new(jwt_config.clone());

    let server = HttpServer::new(move || {
        App::new()
            // Global middleware. The token deserializer runs for every
            // request and only attaches context; guards sit on the
            // individual handlers.
            .wrap(Logger::default())
            .wrap(RequestLogger)
            .wrap(DeserializeToken::new(jwt_config.clone()))

            // Shared state
            .app_data(connection.clone())
            .app_data(jwt_config_data.clone())

            .route("/health_check", web::get().to(health_check))

            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(register))
                    .route("/login", web::post().to(login))
                    .route("/refresh", web::post().to(refresh))
                    .route("/session", web::get().to(session)),
            )

            // Reads are public; mutations are admin-guarded in the handlers.
            .service(
                web::scope("/product")
                    .service(
                        web::resource("")
                            .route(web::get().to(get_products))
                            .route(web::post().to(create_product)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(get_product))
                            .route(web::put().to(update_product))
                            .route(web::delete().to(delete_product)),
                    ),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
