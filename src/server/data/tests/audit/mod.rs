mod create;

use super::*;

use crate::server::data::audit::AuditRepository;
