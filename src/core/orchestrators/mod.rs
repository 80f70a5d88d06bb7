pub mod app_orchestrator;
