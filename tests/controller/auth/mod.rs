mod logout;
mod user;

use super::*;
