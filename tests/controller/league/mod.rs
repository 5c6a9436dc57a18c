mod standings;

use super::*;
