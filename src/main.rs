use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use boxkey_backend::{
    config::Config,
    database::{create_connection, run_migrations},
    handlers,
    middlewares::create_cors,
    services::{AccessRecordStore, IssuanceService, VerificationService},
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration file");

    // 建立数据库连接，失败则拒绝启动对外服务
    let conn = create_connection(&config.database)
        .await
        .expect("Failed to connect to database");

    // 运行数据库迁移
    run_migrations(&conn)
        .await
        .expect("Failed to run database migrations");

    // 组装服务：连接句柄进程内建立一次，按服务克隆注入
    let store = AccessRecordStore::new(conn);
    let issuance_service = IssuanceService::new(store.clone());
    let verification_service = VerificationService::new(store.clone());

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(issuance_service.clone()))
            .app_data(web::Data::new(verification_service.clone()))
            .configure(swagger_config)
            .configure(handlers::health_config)
            .service(web::scope("/api").configure(handlers::password_config))
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
