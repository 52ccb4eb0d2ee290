pub mod member_list;
