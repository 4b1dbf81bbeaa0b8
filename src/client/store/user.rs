use crate::model::user::UserDto;

/// Signed-in user shared through context
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Set once the initial `/api/auth/user` request has settled
    pub fetched: bool,
}

impl UserState {
    pub fn sign_in(&mut self, user: UserDto) {
        self.user = Some(user);
        self.fetched = true;
    }
}
