pub mod agent_bearer;
