/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use bytes::Bytes;
use http::Response;
use pretty_assertions::assert_eq;
use rds::input::{
    AddTagsToResourceInput, DeleteDbInstanceInput, DescribeDbInstancesInput,
    RemoveTagsFromResourceInput,
};
use rds::model::Tag;
use rds::output::{DescribeDbInstancesOutput, ListTagsForResourceOutput};
use rds::{Rds, UnimplementedRds, OPERATIONS};
use wire_http::event::XmlEventSource;
use wire_http::marshall::Marshall;
use wire_http::response::{ParseStrictResponse, Unmarshaller};
use wire_http::shape::Envelope;
use wire_http::unmarshall::{unmarshall_with, unmarshall_xml};
use wire_protocol_test::{assert_ok, validate_body, MediaType};
use wire_types::Instant;

const DESCRIBE_DB_INSTANCES_RESPONSE: &str = r#"<DescribeDBInstancesResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <DescribeDBInstancesResult>
    <Marker>page-2</Marker>
    <DBInstances>
      <DBInstance>
        <DBInstanceIdentifier>orders-db</DBInstanceIdentifier>
        <DBInstanceClass>db.t3.micro</DBInstanceClass>
        <Engine>postgres</Engine>
        <DBInstanceStatus>available</DBInstanceStatus>
        <Endpoint>
          <Address>orders-db.abc123.us-east-1.rds.amazonaws.com</Address>
          <Port>5432</Port>
        </Endpoint>
        <AllocatedStorage>20</AllocatedStorage>
        <InstanceCreateTime>2019-12-16T23:48:18Z</InstanceCreateTime>
        <MultiAZ>false</MultiAZ>
        <PendingModifiedValues/>
      </DBInstance>
      <DBInstance>
        <DBInstanceIdentifier>audit-db</DBInstanceIdentifier>
        <MultiAZ>true</MultiAZ>
      </DBInstance>
    </DBInstances>
  </DescribeDBInstancesResult>
  <ResponseMetadata>
    <RequestId>9135fff3-8509-11e0-bd9b-a7b1ece36d51</RequestId>
  </ResponseMetadata>
</DescribeDBInstancesResponse>"#;

#[test]
fn describe_db_instances_request() {
    let frame = DescribeDbInstancesInput {
        db_instance_identifier: Some("orders-db".into()),
        max_records: Some(20),
        marker: None,
    }
    .marshall()
    .unwrap();
    assert_eq!(frame.method, http::Method::POST);
    assert_eq!(frame.path, "/");
    assert_eq!(
        frame.header("content-type"),
        Some("application/x-www-form-urlencoded; charset=utf-8")
    );
    assert_ok(validate_body(
        &frame.body,
        "Action=DescribeDBInstances&Version=2014-10-31&DBInstanceIdentifier=orders-db&MaxRecords=20",
        MediaType::UrlEncodedForm,
    ));
}

#[test]
fn tags_use_their_member_name() {
    let frame = AddTagsToResourceInput {
        resource_name: Some("arn:aws:rds:us-east-1:123456789012:db:orders-db".into()),
        tags: Some(vec![
            Tag {
                key: Some("env".into()),
                value: Some("prod".into()),
            },
            Tag {
                key: Some("team".into()),
                value: None,
            },
        ]),
    }
    .marshall()
    .unwrap();
    assert_ok(validate_body(
        &frame.body,
        "Action=AddTagsToResource&Version=2014-10-31\
         &ResourceName=arn%3Aaws%3Ards%3Aus-east-1%3A123456789012%3Adb%3Aorders-db\
         &Tags.Tag.1.Key=env&Tags.Tag.1.Value=prod&Tags.Tag.2.Key=team",
        MediaType::UrlEncodedForm,
    ));
}

#[test]
fn string_lists_and_booleans() {
    let frame = RemoveTagsFromResourceInput {
        resource_name: Some("db".into()),
        tag_keys: Some(vec!["env".into(), "team".into()]),
    }
    .marshall()
    .unwrap();
    assert_ok(validate_body(
        &frame.body,
        "Action=RemoveTagsFromResource&Version=2014-10-31&ResourceName=db\
         &TagKeys.member.1=env&TagKeys.member.2=team",
        MediaType::UrlEncodedForm,
    ));

    let frame = DeleteDbInstanceInput {
        db_instance_identifier: Some("db".into()),
        skip_final_snapshot: Some(true),
        ..Default::default()
    }
    .marshall()
    .unwrap();
    assert_ok(validate_body(
        &frame.body,
        "Action=DeleteDBInstance&Version=2014-10-31&DBInstanceIdentifier=db&SkipFinalSnapshot=true",
        MediaType::UrlEncodedForm,
    ));
}

#[test]
fn describe_db_instances_response() {
    let output: DescribeDbInstancesOutput = unmarshall_xml(DESCRIBE_DB_INSTANCES_RESPONSE).unwrap();
    assert_eq!(output.marker.as_deref(), Some("page-2"));
    assert_eq!(output.db_instances.len(), 2);
    let orders = &output.db_instances[0];
    assert_eq!(orders.db_instance_identifier.as_deref(), Some("orders-db"));
    assert_eq!(orders.allocated_storage, Some(20));
    assert_eq!(orders.multi_az, Some(false));
    assert_eq!(
        orders.instance_create_time,
        Some(Instant::from_secs(1576540098))
    );
    let endpoint = orders.endpoint.as_ref().unwrap();
    assert_eq!(endpoint.port, Some(5432));
    assert_eq!(
        endpoint.address.as_deref(),
        Some("orders-db.abc123.us-east-1.rds.amazonaws.com")
    );
    assert_eq!(output.db_instances[1].multi_az, Some(true));
    assert_eq!(output.db_instances[1].endpoint, None);
}

#[test]
fn response_through_the_operation_parser() {
    let response = Response::builder()
        .status(200)
        .body(Bytes::from_static(
            br#"<ListTagsForResourceResponse>
                  <ListTagsForResourceResult>
                    <TagList>
                      <Tag><Key>env</Key><Value>prod</Value></Tag>
                      <Tag><Key>empty</Key><Value></Value></Tag>
                    </TagList>
                  </ListTagsForResourceResult>
                </ListTagsForResourceResponse>"#,
        ))
        .unwrap();
    let parser =
        Unmarshaller::<ListTagsForResourceOutput>::new(&rds::operation::LIST_TAGS_FOR_RESOURCE);
    let output = parser.parse(&response).unwrap();
    assert_eq!(
        output.tag_list,
        vec![
            Tag {
                key: Some("env".into()),
                value: Some("prod".into())
            },
            Tag {
                key: Some("empty".into()),
                value: Some("".into())
            },
        ]
    );
}

#[test]
fn the_envelope_decides_where_members_are_read() {
    // one level too shallow: the result wrapper is mistaken for the message
    let output: DescribeDbInstancesOutput = unmarshall_with(
        XmlEventSource::new(DESCRIBE_DB_INSTANCES_RESPONSE),
        Envelope::ROOT,
    )
    .unwrap();
    assert_eq!(output, DescribeDbInstancesOutput::default());
}

#[test]
fn every_operation_is_unimplemented_by_default() {
    let stub = UnimplementedRds;
    let failures = [
        stub.add_tags_to_resource(Default::default()).unwrap_err(),
        stub.delete_db_instance(Default::default()).unwrap_err(),
        stub.describe_db_instances(Default::default()).unwrap_err(),
        stub.list_tags_for_resource(Default::default()).unwrap_err(),
        stub.remove_tags_from_resource(Default::default()).unwrap_err(),
    ];
    assert_eq!(failures.len(), OPERATIONS.len());
    for (failure, operation) in failures.iter().zip(OPERATIONS) {
        assert!(failure.is_not_implemented());
        assert!(failure.to_string().contains(operation.name));
    }
}
