use crate::auth::application::domain::entities::UserId;

/// Who is acting on a listing. Admins bypass ownership and activation checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Admin(UserId),
    Seller(UserId),
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        matches!(self, Actor::Admin(_))
    }

    pub fn user_id(&self) -> UserId {
        match self {
            Actor::Admin(id) | Actor::Seller(id) => *id,
        }
    }
}
