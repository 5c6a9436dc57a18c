mod form;

use super::*;
