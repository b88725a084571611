//! User Entity Implementation
//!
//! 서비스가 관리하는 유일한 엔티티입니다.
//! JSON 표현은 기존 클라이언트와의 호환을 위해 `Id, Name, Email, Phone, Age`
//! 순서와 키 이름을 그대로 유지합니다.

use std::fmt;
use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Serialize;

/// 사용자 레코드
///
/// `Id`는 서버가 생성하지 않고 클라이언트가 직접 지정합니다.
/// 요청 본문에 빠진 필드는 기본값(`0`, 빈 문자열)으로 채워지므로,
/// `Id`가 없는 본문은 `Id == 0`으로 취급됩니다.
///
/// 역직렬화 시 키는 대소문자를 구분하지 않습니다 (`id`, `ID`, `Id` 모두 허용).
/// 같은 필드가 여러 번 나오면 마지막 값이 남고, `null` 값과 모르는 키는 무시됩니다.
///
/// # JSON 형식
///
/// ```json
/// {"Id":2,"Name":"gopi","Email":"gopi@gmail.com","Phone":"1234567899","Age":23}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
}

impl User {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        age: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            age,
        }
    }
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(UserVisitor)
    }
}

struct UserVisitor;

impl<'de> Visitor<'de> for UserVisitor {
    type Value = User;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a user object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<User, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut user = User::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.to_lowercase().as_str() {
                "id" => assign(&mut user.id, map.next_value()?),
                "name" => assign(&mut user.name, map.next_value()?),
                "email" => assign(&mut user.email, map.next_value()?),
                "phone" => assign(&mut user.phone, map.next_value()?),
                "age" => assign(&mut user.age, map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(user)
    }
}

// null은 기존 값을 유지
fn assign<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}
