//! The fixed GraphQL documents sent to the storefront
//!
//! Field selections are shared between documents through fragments, which are
//! appended to each document that spreads them.

/// A GraphQL document together with the name of the operation it defines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    pub operation_name: &'static str,
    pub source: &'static str,
}

macro_rules! mailing_address_fragment {
    () => {
        "
fragment MailingAddressFields on MailingAddress {
  id
  address1
  address2
  city
  province
  country
  zip
  firstName
  lastName
  phone
}
"
    };
}

macro_rules! customer_fragment {
    () => {
        concat!(
            "
fragment CustomerFields on Customer {
  id
  email
  firstName
  lastName
  displayName
  phone
  acceptsMarketing
  createdAt
  updatedAt
  defaultAddress {
    ...MailingAddressFields
  }
  addresses(first: 20) {
    edges {
      node {
        ...MailingAddressFields
      }
    }
  }
}
",
            mailing_address_fragment!()
        )
    };
}

macro_rules! checkout_fragment {
    () => {
        "
fragment CheckoutFields on Checkout {
  id
  webUrl
  ready
  completedAt
}
"
    };
}

pub const CUSTOMER_QUERY: Document = Document {
    operation_name: "customer",
    source: concat!(
        "
query customer($customerAccessToken: String!) {
  customer(customerAccessToken: $customerAccessToken) {
    ...CustomerFields
  }
}
",
        customer_fragment!()
    ),
};

pub const CUSTOMER_CREATE_MUTATION: Document = Document {
    operation_name: "customerCreate",
    source: concat!(
        "
mutation customerCreate($input: CustomerCreateInput!) {
  customerCreate(input: $input) {
    customer {
      ...CustomerFields
    }
    customerUserErrors {
      field
      message
      code
    }
    userErrors {
      field
      message
    }
  }
}
",
        customer_fragment!()
    ),
};

pub const CUSTOMER_ACCESS_TOKEN_CREATE_MUTATION: Document = Document {
    operation_name: "customerAccessTokenCreate",
    source: "
mutation customerAccessTokenCreate($input: CustomerAccessTokenCreateInput!) {
  customerAccessTokenCreate(input: $input) {
    customerAccessToken {
      accessToken
      expiresAt
    }
    customerUserErrors {
      field
      message
      code
    }
    userErrors {
      field
      message
    }
  }
}
",
};

pub const CHECKOUT_CUSTOMER_ASSOCIATE_V2_MUTATION: Document = Document {
    operation_name: "checkoutCustomerAssociateV2",
    source: concat!(
        "
mutation checkoutCustomerAssociateV2($checkoutId: ID!, $customerAccessToken: String!) {
  checkoutCustomerAssociateV2(checkoutId: $checkoutId, customerAccessToken: $customerAccessToken) {
    checkout {
      ...CheckoutFields
    }
    userErrors {
      field
      message
    }
  }
}
",
        checkout_fragment!()
    ),
};

pub const CHECKOUT_CUSTOMER_DISASSOCIATE_V2_MUTATION: Document = Document {
    operation_name: "checkoutCustomerDisassociateV2",
    source: concat!(
        "
mutation checkoutCustomerDisassociateV2($checkoutId: ID!) {
  checkoutCustomerDisassociateV2(checkoutId: $checkoutId) {
    checkout {
      ...CheckoutFields
    }
    userErrors {
      field
      message
    }
  }
}
",
        checkout_fragment!()
    ),
};
