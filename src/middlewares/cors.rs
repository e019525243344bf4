use actix_cors::Cors;
use actix_web::http::header;

pub fn create_cors() -> Cors {
    // 访问码本身就是唯一凭证，跨域不携带 Cookie 等凭据
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}
