use serde::{Deserialize, Serialize};
use std::fmt;

/// Flags de tipo de usuario que devuelve /auth/login
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UserType {
    #[serde(default)]
    pub is_client: bool,
    #[serde(default)]
    pub is_driver: bool,
    #[serde(default)]
    pub is_employee: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub user_type: Option<UserType>,
}

/// Rol canónico del cliente web (campo "role")
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Client,
    Driver,
}

impl Role {
    /// employee > driver > client cuando vienen varios flags a la vez
    pub fn from_user_type(user_type: &UserType) -> Option<Self> {
        if user_type.is_employee {
            Some(Role::Admin)
        } else if user_type.is_driver {
            Some(Role::Driver)
        } else if user_type.is_client {
            Some(Role::Client)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Client => "client",
            Role::Driver => "driver",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "client" => Some(Role::Client),
            "driver" => Some(Role::Driver),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_flag_wins() {
        let user_type = UserType {
            is_client: true,
            is_driver: true,
            is_employee: true,
        };
        assert_eq!(Role::from_user_type(&user_type), Some(Role::Admin));
    }

    #[test]
    fn driver_wins_over_client() {
        let user_type = UserType {
            is_client: true,
            is_driver: true,
            is_employee: false,
        };
        assert_eq!(Role::from_user_type(&user_type), Some(Role::Driver));
    }

    #[test]
    fn no_flags_means_no_role() {
        assert_eq!(Role::from_user_type(&UserType::default()), None);
    }

    #[test]
    fn role_round_trips_through_its_name() {
        for role in [Role::Admin, Role::Client, Role::Driver] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("funcionario"), None);
    }

    #[test]
    fn login_response_without_user_type() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"access_token": "abc", "token_type": "bearer"}"#).unwrap();
        assert_eq!(response.access_token, "abc");
        assert!(response.user_type.is_none());
    }
}
